use crate::record::*;
use itertools::Itertools;

/// Positions of the role columns within [`Dataset::header`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndexes {
    pub company_name: usize,
    /// Optional for tables that already contain coordinates.
    pub address: Option<usize>,
    pub latitude: usize,
    pub longitude: usize,
}

/// An ordered list of location records.
///
/// The order of the records is the order of the uploaded rows
/// and is kept for export and for drawing the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    header: Vec<String>,
    columns: ColumnIndexes,
    records: Vec<LocationRecord>,
}

impl Dataset {
    pub fn new(header: Vec<String>, columns: ColumnIndexes, records: Vec<LocationRecord>) -> Self {
        debug_assert!(columns.company_name < header.len());
        debug_assert!(columns.address.map_or(true, |idx| idx < header.len()));
        debug_assert!(columns.latitude < header.len());
        debug_assert!(columns.longitude < header.len());
        Self {
            header,
            columns,
            records,
        }
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub const fn columns(&self) -> ColumnIndexes {
        self.columns
    }

    pub fn records(&self) -> &[LocationRecord] {
        &self.records
    }

    pub fn records_mut(&mut self) -> impl Iterator<Item = &mut LocationRecord> {
        self.records.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn count_unresolved(&self) -> usize {
        self.records.iter().filter(|r| !r.is_resolved()).count()
    }

    /// Distinct company names in order of their first appearance.
    pub fn companies(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.company_name.as_str())
            .unique()
            .collect()
    }
}
