//! # locmap-core
//!
//! Use cases of the geocode enrichment pipeline:
//! normalize an uploaded table, resolve missing coordinates
//! and prepare the enriched data for export and map rendering.

pub mod gateways;
pub mod usecases;

pub mod entities {
    pub use locmap_entities::{color::*, dataset::*, geo::*, record::*, report::*, table::*};
}
