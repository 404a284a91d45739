use super::{header_from_cells, trim_rows};
use crate::{error::AppError, Cell, Result, Table};
use calamine::{open_workbook_auto, Data, Reader};
use rust_xlsxwriter::{Format as CellFormat, Workbook};
use std::path::Path;

pub const MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Reads the first worksheet; its first row is the header.
pub fn read(path: &Path) -> Result<Table> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(AppError::NoWorksheet)??;
    let mut rows = range.rows();
    let header = match rows.next() {
        Some(cells) => header_from_cells(cells.iter().map(|cell| cell.to_string())),
        None => return Err(AppError::MissingHeader),
    };
    let mut rows: Vec<Vec<Cell>> = rows.map(|cells| cells.iter().map(to_cell).collect()).collect();
    trim_rows(&mut rows);
    Ok(Table { header, rows })
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) if s.is_empty() => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(n) => Cell::Number(*n),
        Data::Int(n) => Cell::Number(*n as f64),
        Data::Bool(b) => Cell::Bool(*b),
        other => Cell::Text(other.to_string()),
    }
}

/// Writes a single worksheet with a bold header row.
pub fn write(table: &Table) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = CellFormat::new().set_bold();
    for (col, name) in table.header.iter().enumerate() {
        worksheet.write_string_with_format(0, column_num(col)?, name, &bold)?;
    }
    for (row_idx, row) in table.rows.iter().enumerate() {
        let row_num = row_num(row_idx + 1)?;
        for (col, cell) in row.iter().enumerate() {
            let col = column_num(col)?;
            match cell {
                Cell::Empty => continue,
                Cell::Text(s) => worksheet.write_string(row_num, col, s)?,
                Cell::Number(n) if n.is_finite() => worksheet.write_number(row_num, col, *n)?,
                Cell::Number(_) => continue,
                Cell::Bool(b) => worksheet.write_boolean(row_num, col, *b)?,
            };
        }
    }
    Ok(workbook.save_to_buffer()?)
}

fn row_num(idx: usize) -> Result<u32> {
    u32::try_from(idx).map_err(|_| rust_xlsxwriter::XlsxError::RowColumnLimitError.into())
}

fn column_num(idx: usize) -> Result<u16> {
    u16::try_from(idx).map_err(|_| rust_xlsxwriter::XlsxError::RowColumnLimitError.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn write_and_read_back() {
        let table = Table {
            header: vec![
                "Company Name".into(),
                "Full Address".into(),
                "Active".into(),
                "latitude".into(),
                "longitude".into(),
            ],
            rows: vec![
                vec![
                    Cell::from("Foo"),
                    Cell::from("Main St 1"),
                    Cell::Bool(true),
                    Cell::Number(39.78),
                    Cell::Number(-89.65),
                ],
                vec![
                    Cell::from("Bar"),
                    Cell::from("Nowhere"),
                    Cell::Bool(false),
                    Cell::Empty,
                    Cell::Empty,
                ],
            ],
        };
        let bytes = write(&table).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("locations.xlsx");
        fs::write(&path, bytes).unwrap();

        let read = read(&path).unwrap();
        assert_eq!(table.header, read.header);
        assert_eq!(2, read.len());
        assert_eq!(table.rows[0], read.rows[0]);
        assert_eq!(Cell::from("Bar"), read.rows[1][0]);
        assert!(read.rows[1][3].is_empty());
        assert!(read.rows[1][4].is_empty());
    }

    #[test]
    fn reject_files_that_are_no_workbooks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("locations.xlsx");
        fs::write(&path, "Company Name,Full Address").unwrap();
        assert!(matches!(read(&path), Err(AppError::ReadSpreadsheet(_))));
    }
}
