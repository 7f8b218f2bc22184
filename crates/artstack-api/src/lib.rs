//! # artstack-api
//!
//! Presentation-facing service facade for the artstack catalog.
//!
//! The UI talks to [`CatalogService`] and renders whatever comes back;
//! everything behind it (loading, normalization, querying, aggregation)
//! lives in the lower crates.
//!
//! ## Example
//!
//! ```ignore
//! use artstack_api::{CatalogService, QuerySpec};
//!
//! let service = CatalogService::from_env();
//! let popular = service.get_popular_items(None).await?;
//! let hits = service.search_items(&QuerySpec::new().with_text("font")).await?;
//! ```

pub mod config;
pub mod service;

// Re-export the query surface
pub use artstack_core::{CategorySummary, Entry, Error, FilterOptions, Result};
pub use artstack_query::{QuerySpec, SortBy, SortOrder};

pub use config::{CatalogSource, Config};
pub use service::CatalogService;
