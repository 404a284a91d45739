use geocoding::{Forward, Opencage as OpencageClient, Point};
use locmap_core::{entities::MapPoint, gateways::geocode::GeoCodingGateway};

#[derive(Debug, Clone)]
pub struct OpenCage {
    api_key: String,
}

impl OpenCage {
    pub fn new(api_key: String) -> Self {
        Self { api_key }
    }
}

impl GeoCodingGateway for OpenCage {
    fn resolve_address_lat_lng(&self, addr: &str) -> Option<MapPoint> {
        if addr.trim().is_empty() {
            return None;
        }
        let req = OpencageClient::new(self.api_key.clone());
        let res: Vec<Point<f64>> = match req.forward(addr) {
            Ok(res) => res,
            Err(err) => {
                log::warn!("Failed to resolve address location '{addr}': {err}");
                return None;
            }
        };
        let Some(point) = res.first() else {
            log::warn!("No location found for address '{addr}'");
            return None;
        };
        log::debug!("Resolved address location '{addr}': {point:?}");
        let pos = MapPoint::try_from_lat_lng_deg(point.y(), point.x());
        if pos.is_none() {
            log::warn!("Invalid location of address '{addr}': {point:?}");
        }
        pos
    }
}
