use std::time::Duration;

use locmap_core::{entities::MapPoint, gateways::geocode::GeoCodingGateway};
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

const STATUS_OK: &str = "OK";

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("API status {status}: {message}")]
    Status { status: String, message: String },
    #[error("No results")]
    NoResults,
    #[error("Invalid location: {0}, {1}")]
    InvalidLocation(f64, f64),
}

#[derive(Debug, Deserialize)]
struct Response {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Location,
}

#[derive(Debug, Deserialize)]
struct Location {
    lat: f64,
    lng: f64,
}

/// Google Maps Geocoding API.
#[derive(Debug, Clone)]
pub struct GoogleMaps {
    api_key: String,
    api_url: String,
    client: reqwest::blocking::Client,
}

impl GoogleMaps {
    pub fn new(api_key: String, timeout: Option<Duration>) -> reqwest::Result<Self> {
        Self::with_api_url(api_key, DEFAULT_API_URL.to_string(), timeout)
    }

    pub fn with_api_url(
        api_key: String,
        api_url: String,
        timeout: Option<Duration>,
    ) -> reqwest::Result<Self> {
        // `None` also disables the default timeout of the blocking client
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("locmap/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            api_key,
            api_url,
            client,
        })
    }

    fn lookup(&self, addr: &str) -> Result<MapPoint, Error> {
        let response: Response = self
            .client
            .get(&self.api_url)
            .query(&[("address", addr), ("key", self.api_key.as_str())])
            .send()?
            .error_for_status()?
            .json()?;
        let Response {
            status,
            error_message,
            results,
        } = response;
        if status != STATUS_OK {
            return Err(Error::Status {
                status,
                message: error_message.unwrap_or_default(),
            });
        }
        let Location { lat, lng } = results
            .into_iter()
            .next()
            .map(|r| r.geometry.location)
            .ok_or(Error::NoResults)?;
        MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Error::InvalidLocation(lat, lng))
    }
}

impl GeoCodingGateway for GoogleMaps {
    fn resolve_address_lat_lng(&self, addr: &str) -> Option<MapPoint> {
        if addr.trim().is_empty() {
            return None;
        }
        match self.lookup(addr) {
            Ok(pos) => {
                log::debug!("Resolved address location '{addr}': {pos}");
                Some(pos)
            }
            Err(err) => {
                log::warn!("Failed to resolve address location '{addr}': {err}");
                None
            }
        }
    }
}
