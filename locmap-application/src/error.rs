use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Usecase(#[from] locmap_core::usecases::Error),
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),
    #[error("The workbook does not contain any worksheet")]
    NoWorksheet,
    #[error("The file does not contain a header row")]
    MissingHeader,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Csv(#[from] ::csv::Error),
    #[error(transparent)]
    ReadSpreadsheet(#[from] calamine::Error),
    #[error(transparent)]
    WriteSpreadsheet(#[from] rust_xlsxwriter::XlsxError),
    #[error(transparent)]
    Render(anyhow::Error),
}
