use anyhow::{anyhow, Result};
use locmap_core::{
    entities::{Color, Palette},
    usecases::{ColumnNames, LayerMode, MapOptions},
};
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "locmap.toml";

const ENV_NAME_GOOGLE_MAPS_API_KEY: &str = "GOOGLE_MAPS_API_KEY";
const ENV_NAME_OPENCAGE_API_KEY: &str = "OPENCAGE_API_KEY";

const MAX_ZOOM: u8 = 19;

pub struct Config {
    pub columns: ColumnNames,
    pub geocoding: Geocoding,
    pub map: MapOptions,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::debug!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let mut raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::debug!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        apply_env_overrides(&mut raw_config, |name| env::var(name).ok());
        Self::try_from(raw_config)
    }
}

pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeocodingGateway {
    Google {
        api_key: String,
        api_url: String,
        timeout: Option<Duration>,
    },
    OpenCage {
        api_key: String,
    },
}

fn apply_env_overrides(cfg: &mut raw::Config, var: impl Fn(&str) -> Option<String>) {
    if let Some(api_key) = var(ENV_NAME_GOOGLE_MAPS_API_KEY) {
        let gateway = cfg.gateway.get_or_insert_with(Default::default);
        gateway.google.get_or_insert_with(Default::default).api_key = Some(api_key);
    }
    if let Some(api_key) = var(ENV_NAME_OPENCAGE_API_KEY) {
        let gateway = cfg.gateway.get_or_insert_with(Default::default);
        gateway.opencage.get_or_insert_with(Default::default).api_key = Some(api_key);
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            columns,
            geocoding,
            gateway,
            map,
        } = from;

        let raw::Columns {
            company_name,
            address,
            latitude,
            longitude,
        } = columns.unwrap_or_default();
        let columns = ColumnNames {
            company_name,
            address,
            latitude,
            longitude,
        };

        let gateway = gateway.unwrap_or_default();
        let geo_gateway = match geocoding.and_then(|g| g.gateway) {
            Some(raw::GeocodingGateway::Google) => {
                let raw::Google {
                    api_key,
                    api_url,
                    timeout,
                } = gateway.google.unwrap_or_default();
                match api_key.filter(|key| !key.trim().is_empty()) {
                    Some(api_key) => {
                        let api_url = api_url.unwrap_or_else(|| {
                            locmap_gateways::google::DEFAULT_API_URL.to_string()
                        });
                        log::info!("Use Google Maps geocoding gateway");
                        Some(GeocodingGateway::Google {
                            api_key,
                            api_url,
                            timeout,
                        })
                    }
                    None => {
                        log::warn!(
                            "No Google Maps API key found ({ENV_NAME_GOOGLE_MAPS_API_KEY}): geocoding is disabled"
                        );
                        None
                    }
                }
            }
            Some(raw::GeocodingGateway::Opencage) => {
                let raw::OpenCage { api_key } = gateway.opencage.unwrap_or_default();
                match api_key.filter(|key| !key.trim().is_empty()) {
                    Some(api_key) => {
                        log::info!("Use OpenCage geocoding gateway");
                        Some(GeocodingGateway::OpenCage { api_key })
                    }
                    None => {
                        log::warn!(
                            "No OpenCage API key found ({ENV_NAME_OPENCAGE_API_KEY}): geocoding is disabled"
                        );
                        None
                    }
                }
            }
            None => None,
        };
        let geocoding = Geocoding {
            gateway: geo_gateway,
        };

        let raw::Map {
            zoom,
            clustering,
            palette,
        } = map.unwrap_or_default();
        if zoom > MAX_ZOOM {
            return Err(anyhow!("Invalid map zoom {zoom} (max. {MAX_ZOOM})"));
        }
        let palette = match palette {
            Some(colors) => {
                let colors = colors
                    .iter()
                    .map(|c| c.parse::<Color>())
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Palette::new(colors).ok_or_else(|| anyhow!("Empty color palette"))?
            }
            None => Palette::default(),
        };
        let layer_mode = if clustering {
            LayerMode::Clustered
        } else {
            LayerMode::PerCompany
        };
        let map = MapOptions {
            zoom,
            layer_mode,
            palette,
        };

        Ok(Self {
            columns,
            geocoding,
            map,
        })
    }
}
