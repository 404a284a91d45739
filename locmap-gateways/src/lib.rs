//! Adapters that connect the use cases of `locmap-core`
//! with external services and output formats.

pub mod google;
pub mod leaflet;
pub mod opencage;
