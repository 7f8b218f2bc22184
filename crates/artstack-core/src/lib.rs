//! # artstack-core
//!
//! Core types, errors, and static tables for the artstack catalog.
//!
//! This crate provides the foundational data structures that the other
//! artstack crates depend on: the raw document schema, the normalized
//! [`Entry`] model, the error taxonomy, centralized defaults, structured
//! logging field names, and the static translation tables.

pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod translate;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::{
    CategoryMain, CategorySummary, Entry, FilterOptions, RawCatalogDocument, RawEntry, RawGroups,
    SubgroupMap,
};
pub use translate::{subgroup_description, subgroup_image, subgroup_name, translate_description};
