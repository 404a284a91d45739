use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("The column '{0}' is assigned to more than one role")]
    AmbiguousColumn(String),
    #[error("Row {row} has more values than the header has columns ({columns})")]
    RowTooWide { row: usize, columns: usize },
    #[error("No rows of the company '{0}'")]
    UnknownCompany(String),
}
