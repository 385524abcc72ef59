//! Closed enumerations, their versioned catalog, and the catalog cache.

mod cache;
mod catalog;
mod seed;
mod types;

pub use cache::CatalogCache;
pub use catalog::{set_names, EnumCatalog};
pub use seed::seed_enum_catalog;
pub use types::{
    DetailLocation, LocationReference, RaidLocationCategory, SourceOfInfo, Tactic, WasSuccessful,
};
