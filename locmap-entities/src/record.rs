use crate::{geo::*, table::*};

/// One row of an uploaded location list.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRecord {
    pub company_name : String,
    pub address      : String,
    /// `None` until the record has been geocoded or if the
    /// uploaded coordinates were missing or incomplete.
    pub position     : Option<MapPoint>,
    /// All cells of the original row in column order.
    pub cells        : Vec<Cell>,
}

impl LocationRecord {
    pub fn is_resolved(&self) -> bool {
        self.position.is_some()
    }

    pub fn has_address(&self) -> bool {
        !self.address.trim().is_empty()
    }
}
