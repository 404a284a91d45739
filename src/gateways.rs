use crate::config::{Geocoding, GeocodingGateway};
use anyhow::Result;
use locmap_core::gateways::geocode::GeoCodingGateway;
use locmap_gateways::{google::GoogleMaps, opencage::OpenCage};

pub fn geocoding_gateway(cfg: &Geocoding) -> Result<Option<Box<dyn GeoCodingGateway>>> {
    let Some(gateway) = &cfg.gateway else {
        return Ok(None);
    };
    let gw: Box<dyn GeoCodingGateway> = match gateway {
        GeocodingGateway::Google {
            api_key,
            api_url,
            timeout,
        } => Box::new(GoogleMaps::with_api_url(
            api_key.clone(),
            api_url.clone(),
            *timeout,
        )?),
        GeocodingGateway::OpenCage { api_key } => Box::new(OpenCage::new(api_key.clone())),
    };
    Ok(Some(gw))
}
