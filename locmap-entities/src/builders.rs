pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::table_builder::*;

pub mod table_builder {

    use super::*;
    use crate::table::*;

    #[derive(Debug)]
    pub struct TableBuild {
        table: Table,
    }

    impl TableBuild {
        pub fn header(mut self, header: &[&str]) -> Self {
            self.table.header = header.iter().map(ToString::to_string).collect();
            self
        }
        pub fn row(mut self, cells: &[&str]) -> Self {
            self.table.rows.push(
                cells
                    .iter()
                    .map(|c| if c.is_empty() { Cell::Empty } else { Cell::from(*c) })
                    .collect(),
            );
            self
        }
        pub fn cells(mut self, cells: Vec<Cell>) -> Self {
            self.table.rows.push(cells);
            self
        }
        pub fn finish(self) -> Table {
            self.table
        }
    }

    impl Builder for Table {
        type Build = TableBuild;
        fn build() -> TableBuild {
            TableBuild {
                table: Table::default(),
            }
        }
    }
}
