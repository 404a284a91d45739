use super::*;
use crate::{spreadsheet, usecases::ColumnNames};
use std::path::Path;

/// Reads and validates a file with addresses that should be geocoded.
pub fn upload_file(path: &Path, columns: &ColumnNames) -> Result<Session> {
    let table = spreadsheet::read_table(path)?;
    upload_table(file_name_of(path), &table, columns)
}

pub fn upload_table(file_name: String, table: &Table, columns: &ColumnNames) -> Result<Session> {
    let dataset = usecases::normalize(table, columns)?;
    log_uploaded(&file_name, &dataset);
    Ok(Session::new(file_name, dataset))
}

/// Reads and validates a file whose rows already carry coordinates.
pub fn upload_file_with_coordinates(path: &Path, columns: &ColumnNames) -> Result<Session> {
    let table = spreadsheet::read_table(path)?;
    let file_name = file_name_of(path);
    let dataset = usecases::normalize_with_coordinates(&table, columns)?;
    log_uploaded(&file_name, &dataset);
    Ok(Session::new(file_name, dataset))
}

fn log_uploaded(file_name: &str, dataset: &Dataset) {
    info!(
        "Uploaded {} row(s) from {} ({} without coordinates)",
        dataset.len(),
        file_name,
        dataset.count_unresolved()
    );
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
