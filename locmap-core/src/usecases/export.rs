use crate::usecases::prelude::*;

/// Converts the current state of a dataset back into a table.
///
/// The column order of the upload is kept and the coordinate
/// columns reflect the current positions. Records without a
/// position are exported with empty coordinate cells.
pub fn export(dataset: &Dataset) -> Table {
    let columns = dataset.columns();
    let width = dataset.header().len();
    let rows = dataset
        .records()
        .iter()
        .map(|record| {
            let mut cells = record.cells.clone();
            cells.resize(width, Cell::Empty);
            let (lat, lng) = record
                .position
                .map(|pos| {
                    let (lat, lng) = pos.to_lat_lng_deg();
                    (Cell::Number(lat), Cell::Number(lng))
                })
                .unwrap_or_default();
            cells[columns.latitude] = lat;
            cells[columns.longitude] = lng;
            cells
        })
        .collect();
    Table {
        header: dataset.header().to_vec(),
        rows,
    }
}

/// Records that can be drawn on a map.
pub fn mappable(dataset: &Dataset) -> Vec<&LocationRecord> {
    dataset
        .records()
        .iter()
        .filter(|r| r.is_resolved())
        .collect()
}
