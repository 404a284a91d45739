use super::*;
use crate::{
    spreadsheet::{self, Format},
    Document,
};

/// Serializes the current state of the session.
///
/// Rows that could not be geocoded are included with empty coordinates.
pub fn export_spreadsheet(session: &Session, format: Format) -> Result<Document> {
    let table = usecases::export(session.dataset());
    let file_name = match format {
        Format::Workbook => spreadsheet::DEFAULT_FILE_NAME.to_string(),
        Format::Csv => format!("updated_locations.{}", format.file_extension()),
    };
    let serialized = spreadsheet::write_table(&table, format, &file_name)?;
    debug!(
        "Exported {} row(s) as {} ({} bytes)",
        table.len(),
        serialized.mime_type,
        serialized.bytes.len()
    );
    Ok(serialized)
}
