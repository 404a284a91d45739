//! Reading and writing of tabular files.

use crate::{error::AppError, Document, Result, Table};
use std::path::Path;

pub mod csv;
pub mod xlsx;

pub const DEFAULT_FILE_NAME: &str = "updated_locations.xlsx";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Csv,
    /// Excel and OpenDocument workbooks; always written as XLSX.
    Workbook,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "csv" | "txt" => Ok(Self::Csv),
            "xlsx" | "xlsm" | "xls" | "xlsb" | "ods" => Ok(Self::Workbook),
            _ => Err(AppError::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Csv => self::csv::MIME_TYPE,
            Self::Workbook => xlsx::MIME_TYPE,
        }
    }

    pub const fn file_extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Workbook => "xlsx",
        }
    }
}

pub fn read_table(path: &Path) -> Result<Table> {
    let table = match Format::from_path(path)? {
        Format::Csv => self::csv::read(path)?,
        Format::Workbook => xlsx::read(path)?,
    };
    debug!(
        "Read {} row(s) with {} column(s) from {}",
        table.len(),
        table.header.len(),
        path.display()
    );
    Ok(table)
}

pub fn write_table(table: &Table, format: Format, file_name: &str) -> Result<Document> {
    let bytes = match format {
        Format::Csv => self::csv::write(table)?,
        Format::Workbook => xlsx::write(table)?,
    };
    Ok(Document {
        bytes,
        mime_type: format.mime_type(),
        file_name: file_name.to_string(),
    })
}

/// Header names are kept verbatim and matched exactly.
fn header_from_cells<I, S>(cells: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    cells.into_iter().map(Into::into).collect()
}

/// Drops trailing empty rows.
fn trim_rows(rows: &mut Vec<Vec<crate::Cell>>) {
    while rows
        .last()
        .is_some_and(|row| row.iter().all(crate::Cell::is_empty))
    {
        rows.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_file_extension() {
        assert_eq!(Format::Csv, Format::from_path(Path::new("a.csv")).unwrap());
        assert_eq!(Format::Csv, Format::from_path(Path::new("a.CSV")).unwrap());
        assert_eq!(
            Format::Workbook,
            Format::from_path(Path::new("dir/a.xlsx")).unwrap()
        );
        assert_eq!(
            Format::Workbook,
            Format::from_path(Path::new("a.ods")).unwrap()
        );
        assert!(matches!(
            Format::from_path(Path::new("a.pdf")),
            Err(AppError::UnsupportedFormat(_))
        ));
        assert!(Format::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn mime_types() {
        assert_eq!("text/csv", Format::Csv.mime_type());
        assert_eq!(
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Format::Workbook.mime_type()
        );
    }
}
