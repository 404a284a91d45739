use super::{header_from_cells, trim_rows};
use crate::{error::AppError, Cell, Result, Table};
use std::{fs, path::Path};

pub const MIME_TYPE: &str = "text/csv";

const DELIMITER_CANDIDATES: &[u8] = &[b',', b';', b'\t', b'|'];
const SNIFF_LINES: usize = 10;

pub fn read(path: &Path) -> Result<Table> {
    let bytes = fs::read(path)?;
    read_from_bytes(&bytes)
}

pub fn read_from_bytes(bytes: &[u8]) -> Result<Table> {
    let content = String::from_utf8_lossy(bytes);
    let content = content.trim_start_matches('\u{feff}');
    let delimiter = sniff_delimiter(content);
    let mut reader = ::csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());
    let mut records = reader.records();
    let header = match records.next() {
        Some(record) => header_from_cells(record?.iter()),
        None => return Err(AppError::MissingHeader),
    };
    let mut rows = records
        .map(|record| -> Result<Vec<Cell>> { Ok(record?.iter().map(text_cell).collect()) })
        .collect::<Result<Vec<_>>>()?;
    trim_rows(&mut rows);
    Ok(Table { header, rows })
}

fn text_cell(field: &str) -> Cell {
    if field.is_empty() {
        Cell::Empty
    } else {
        Cell::Text(field.to_string())
    }
}

/// Picks the delimiter that splits the first lines into the
/// most consistent number of fields (more than one).
fn sniff_delimiter(content: &str) -> u8 {
    let lines: Vec<&str> = content.lines().take(SNIFF_LINES).collect();
    let mut best = b',';
    let mut best_score = 0;
    for &delimiter in DELIMITER_CANDIDATES {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_fields(line, delimiter))
            .collect();
        let Some(&target) = counts.first() else {
            break;
        };
        if target <= 1 {
            continue;
        }
        let score = counts.iter().filter(|&&c| c == target).count() * target;
        if score > best_score {
            best_score = score;
            best = delimiter;
        }
    }
    best
}

fn count_fields(line: &str, delimiter: u8) -> usize {
    ::csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes())
        .records()
        .next()
        .and_then(|r| r.ok())
        .map_or(1, |r| r.len())
}

pub fn write(table: &Table) -> Result<Vec<u8>> {
    let mut writer = ::csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());
    writer.write_record(&table.header)?;
    for row in &table.rows {
        writer.write_record(row.iter().map(Cell::to_text))?;
    }
    writer
        .into_inner()
        .map_err(|err| AppError::Io(err.into_error()))
}
