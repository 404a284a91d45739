#[macro_use]
extern crate log;

mod export_spreadsheet;
mod geocode;
mod render_map;
mod select_company;
mod session;
mod upload;

pub mod prelude {
    pub use super::{
        export_spreadsheet::*,
        geocode::*,
        render_map::*,
        select_company::*,
        session::*,
        spreadsheet::Format,
        upload::*,
        Document,
    };
}

pub mod error;
pub mod spreadsheet;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub use self::session::Session;

/// A file that is ready to be downloaded or saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
    pub file_name: String,
}

pub(crate) use locmap_core::{entities::*, gateways, usecases};

#[cfg(test)]
pub(crate) mod tests;
