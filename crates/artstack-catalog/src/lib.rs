//! # artstack-catalog
//!
//! Catalog loading, normalization, and category aggregation.
//!
//! This crate provides:
//! - [`DocumentSource`] implementations for file and HTTP catalogs
//! - [`CatalogStore`], the once-per-process document cache
//! - [`normalize`], the raw-document flattener
//! - [`aggregate`] and slug lookup for category browsing
//!
//! ## Example
//!
//! ```ignore
//! use artstack_catalog::{aggregate, normalize, CatalogStore, FileSource};
//!
//! let store = CatalogStore::new(FileSource::new("public/database.json"));
//! let doc = store.load().await?;
//! let entries = normalize(&doc);
//! let categories = aggregate(&entries);
//! ```

pub mod aggregate;
pub mod normalize;
pub mod source;
pub mod store;

// Re-export core types
pub use artstack_core::*;

pub use aggregate::{aggregate, category_by_slug, slug};
pub use normalize::normalize;
pub use source::{DocumentSource, FileSource, HttpSource};
pub use store::CatalogStore;
