use std::{cell::RefCell, collections::HashMap};

pub use super::*;
pub use crate::{entities::*, gateways::geocode::GeoCodingGateway};
use locmap_entities::builders::Builder;

#[derive(Default)]
pub struct MockGeoGw {
    positions: HashMap<String, MapPoint>,
    requested: RefCell<Vec<String>>,
}

impl MockGeoGw {
    pub fn with(mut self, addr: &str, lat: f64, lng: f64) -> Self {
        self.positions
            .insert(addr.to_string(), MapPoint::from_lat_lng_deg(lat, lng));
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl GeoCodingGateway for MockGeoGw {
    fn resolve_address_lat_lng(&self, addr: &str) -> Option<MapPoint> {
        self.requested.borrow_mut().push(addr.to_string());
        self.positions.get(addr).copied()
    }
}

/// Builds a normalized dataset with the default column names.
pub fn dataset_with_rows(rows: &[(&str, &str, Option<(f64, f64)>)]) -> Dataset {
    let mut build = Table::build().header(&["Company Name", "Full Address", "latitude", "longitude"]);
    for (company, address, pos) in rows {
        let (lat, lng) = match pos {
            Some((lat, lng)) => (Cell::Number(*lat), Cell::Number(*lng)),
            None => (Cell::Empty, Cell::Empty),
        };
        build = build.cells(vec![Cell::from(*company), Cell::from(*address), lat, lng]);
    }
    normalize(&build.finish(), &ColumnNames::default()).unwrap()
}
