//! Environment configuration for the catalog service.
//!
//! ## Configuration
//!
//! Environment variables (a `.env` file is honored via dotenvy):
//! - `ARTSTACK_CATALOG_PATH`: local path to the catalog document
//!   (default: `public/database.json`)
//! - `ARTSTACK_CATALOG_URL`: HTTP location of the catalog document;
//!   the path takes precedence when both are set
//! - `ARTSTACK_PAGE_LIMIT`: default page size (default: 24)
//! - `ARTSTACK_POPULAR_LIMIT`: default popular-shelf size (default: 12)

use artstack_core::defaults;
use tracing::info;

/// Where the service should fetch the catalog document from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(String),
    Http(String),
}

/// Resolved service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub source: CatalogSource,
    pub page_limit: usize,
    pub popular_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: CatalogSource::File(defaults::CATALOG_PATH.to_string()),
            page_limit: defaults::PAGE_LIMIT,
            popular_limit: defaults::POPULAR_LIMIT,
        }
    }
}

impl Config {
    /// Build a config from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let source = match (
            std::env::var("ARTSTACK_CATALOG_PATH").ok(),
            std::env::var("ARTSTACK_CATALOG_URL").ok(),
        ) {
            (Some(path), _) => CatalogSource::File(path),
            (None, Some(url)) => CatalogSource::Http(url),
            (None, None) => CatalogSource::File(defaults::CATALOG_PATH.to_string()),
        };

        let page_limit = env_usize("ARTSTACK_PAGE_LIMIT", defaults::PAGE_LIMIT);
        let popular_limit = env_usize("ARTSTACK_POPULAR_LIMIT", defaults::POPULAR_LIMIT);

        info!(
            subsystem = "service",
            op = "config",
            source = ?source,
            page_limit,
            popular_limit,
            "catalog service configuration resolved"
        );

        Self {
            source,
            page_limit,
            popular_limit,
        }
    }
}

fn env_usize(key: &str, default: usize) -> usize {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
