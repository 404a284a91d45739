pub mod prelude {
    use std::{cell::RefCell, collections::HashMap};

    pub use crate::{error::AppError, prelude::*, spreadsheet};
    pub use locmap_core::{
        entities::*,
        gateways::{geocode::GeoCodingGateway, render::MapRenderer},
        usecases::ColumnNames,
    };
    pub use locmap_entities::builders::Builder;

    pub fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Three rows: one to resolve, one that can't be resolved
    /// and one that already has coordinates.
    pub fn sample_table() -> Table {
        Table::build()
            .header(&["Company Name", "Full Address", "Phone"])
            .row(&["Foo", "Main St 1, Springfield", "123"])
            .row(&["Bar", "Nowhere 0", ""])
            .row(&["Baz", "Elm St 2", "456"])
            .finish()
            .with_coordinates(2, 10.0, 20.0)
    }

    trait WithCoordinates {
        fn with_coordinates(self, row: usize, lat: f64, lng: f64) -> Self;
    }

    impl WithCoordinates for Table {
        fn with_coordinates(mut self, row: usize, lat: f64, lng: f64) -> Self {
            for name in ["latitude", "longitude"] {
                if self.column_index(name).is_none() {
                    self.header.push(name.to_string());
                }
            }
            let width = self.header.len();
            for cells in &mut self.rows {
                cells.resize(width, Cell::Empty);
            }
            self.rows[row][width - 2] = Cell::Number(lat);
            self.rows[row][width - 1] = Cell::Number(lng);
            self
        }
    }

    #[derive(Default)]
    pub struct MockGeoGw {
        positions: HashMap<String, MapPoint>,
        requested: RefCell<Vec<String>>,
    }

    impl MockGeoGw {
        pub fn with(mut self, addr: &str, lat: f64, lng: f64) -> Self {
            self.positions
                .insert(addr.to_string(), MapPoint::from_lat_lng_deg(lat, lng));
            self
        }

        pub fn requested(&self) -> Vec<String> {
            self.requested.borrow().clone()
        }
    }

    impl GeoCodingGateway for MockGeoGw {
        fn resolve_address_lat_lng(&self, addr: &str) -> Option<MapPoint> {
            self.requested.borrow_mut().push(addr.to_string());
            self.positions.get(addr).copied()
        }
    }
}
