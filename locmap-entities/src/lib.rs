#![deny(missing_debug_implementations)]

//! # locmap-entities
//!
//! Domain entities for company location lists.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod color;
pub mod dataset;
pub mod geo;
pub mod record;
pub mod report;
pub mod table;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
