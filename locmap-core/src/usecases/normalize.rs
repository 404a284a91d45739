use crate::usecases::prelude::*;

pub const DEFAULT_COMPANY_NAME_COLUMN: &str = "Company Name";
pub const DEFAULT_ADDRESS_COLUMN: &str = "Full Address";
pub const DEFAULT_LATITUDE_COLUMN: &str = "latitude";
pub const DEFAULT_LONGITUDE_COLUMN: &str = "longitude";

/// Header names of the columns with a special meaning.
///
/// Names are matched exactly and case-sensitively.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames {
    pub company_name : String,
    pub address      : String,
    pub latitude     : String,
    pub longitude    : String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            company_name: DEFAULT_COMPANY_NAME_COLUMN.to_string(),
            address: DEFAULT_ADDRESS_COLUMN.to_string(),
            latitude: DEFAULT_LATITUDE_COLUMN.to_string(),
            longitude: DEFAULT_LONGITUDE_COLUMN.to_string(),
        }
    }
}

impl ColumnNames {
    /// Columns that must exist before addresses can be geocoded.
    pub fn required(&self) -> Vec<&str> {
        vec![self.company_name.as_str(), self.address.as_str()]
    }

    /// Columns that must exist to draw a map without geocoding.
    pub fn required_with_coordinates(&self) -> Vec<&str> {
        vec![
            self.company_name.as_str(),
            self.latitude.as_str(),
            self.longitude.as_str(),
        ]
    }

    fn check_unambiguous(&self) -> Result<()> {
        let names = [
            &self.company_name,
            &self.address,
            &self.latitude,
            &self.longitude,
        ];
        for (i, name) in names.iter().enumerate() {
            if names[i + 1..].contains(name) {
                return Err(Error::AmbiguousColumn(name.to_string()));
            }
        }
        Ok(())
    }
}

/// Validates the uploaded table and turns it into a [`Dataset`].
///
/// Fails if the company name or the address column is missing.
/// Coordinate columns are appended if they don't exist yet.
pub fn normalize(table: &Table, columns: &ColumnNames) -> Result<Dataset> {
    normalize_with_required(table, columns, &columns.required())
}

/// Like [`normalize`] but for tables that already contain coordinates.
/// The address column becomes optional.
pub fn normalize_with_coordinates(table: &Table, columns: &ColumnNames) -> Result<Dataset> {
    normalize_with_required(table, columns, &columns.required_with_coordinates())
}

fn normalize_with_required(
    table: &Table,
    columns: &ColumnNames,
    required: &[&str],
) -> Result<Dataset> {
    columns.check_unambiguous()?;
    let missing: Vec<String> = required
        .iter()
        .filter(|name| table.column_index(name).is_none())
        .map(ToString::to_string)
        .collect();
    if !missing.is_empty() {
        return Err(Error::MissingColumns(missing));
    }
    check_row_widths(table)?;

    let mut header = table.header.clone();
    let mut column_index_or_append = |name: &str| match table.column_index(name) {
        Some(idx) => idx,
        None => {
            log::debug!("Adding missing column '{name}'");
            header.push(name.to_string());
            header.len() - 1
        }
    };
    let latitude = column_index_or_append(&columns.latitude);
    let longitude = column_index_or_append(&columns.longitude);
    let Some(company_name) = table.column_index(&columns.company_name) else {
        return Err(Error::MissingColumns(vec![columns.company_name.clone()]));
    };
    let address = table.column_index(&columns.address);

    let indexes = ColumnIndexes {
        company_name,
        address,
        latitude,
        longitude,
    };
    let records = (0..table.len())
        .map(|row| to_record(table, row, header.len(), indexes))
        .collect();
    Ok(Dataset::new(header, indexes, records))
}

/// Rows must not carry values beyond the last header column.
fn check_row_widths(table: &Table) -> Result<()> {
    let columns = table.header.len();
    for (row, cells) in table.rows.iter().enumerate() {
        if cells.iter().skip(columns).any(|cell| !cell.is_empty()) {
            return Err(Error::RowTooWide {
                row: row + 1,
                columns,
            });
        }
    }
    Ok(())
}

static EMPTY_CELL: Cell = Cell::Empty;

fn to_record(table: &Table, row: usize, width: usize, indexes: ColumnIndexes) -> LocationRecord {
    // Appended columns have no cells in the uploaded rows
    let uploaded_cell = |col: usize| {
        if col < table.header.len() {
            table.cell(row, col)
        } else {
            &EMPTY_CELL
        }
    };
    let company_name = uploaded_cell(indexes.company_name).to_text();
    let address = indexes
        .address
        .map(|col| uploaded_cell(col).to_text().trim().to_string())
        .unwrap_or_default();
    let position = position(
        row,
        uploaded_cell(indexes.latitude),
        uploaded_cell(indexes.longitude),
    );
    let mut cells = table.rows[row].clone();
    cells.truncate(table.header.len());
    cells.resize(width, Cell::Empty);
    LocationRecord {
        company_name,
        address,
        position,
        cells,
    }
}

fn position(row: usize, lat: &Cell, lng: &Cell) -> Option<MapPoint> {
    if lat.is_empty() && lng.is_empty() {
        return None;
    }
    let pos = lat
        .as_f64()
        .zip(lng.as_f64())
        .and_then(|(lat, lng)| MapPoint::try_from_lat_lng_deg(lat, lng));
    if pos.is_none() {
        log::warn!(
            "Ignoring incomplete or invalid coordinates in row {}: '{}', '{}'",
            row + 1,
            lat.to_text(),
            lng.to_text()
        );
    }
    pos
}
