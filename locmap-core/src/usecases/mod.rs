mod assign_colors;
mod error;
mod export;
mod filter_by_company;
mod normalize;
mod prepare_map;
mod resolve;
mod summarize;

#[cfg(test)]
pub mod tests;

pub use self::{
    assign_colors::*, error::Error, export::*, filter_by_company::*, normalize::*, prepare_map::*,
    resolve::*, summarize::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::entities::*;
}
