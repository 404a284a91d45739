use locmap_entities::geo::MapPoint;

/// Resolves a free-text address into a position.
///
/// Every kind of failure (transport, HTTP status, API status,
/// empty or malformed result) is reported as `None`.
pub trait GeoCodingGateway {
    fn resolve_address_lat_lng(&self, addr: &str) -> Option<MapPoint>;
}

impl<F> GeoCodingGateway for F
where
    F: Fn(&str) -> Option<MapPoint>,
{
    fn resolve_address_lat_lng(&self, addr: &str) -> Option<MapPoint> {
        self(addr)
    }
}
