//! The presentation-facing catalog service.
//!
//! Every method is a thin composition of store -> normalize -> (query |
//! aggregate). Derived collections are recomputed per call from the cached
//! document; the service keeps no query or pagination state of its own, so
//! the presentation layer can call it fresh on every input change.

use crate::config::{CatalogSource, Config};
use artstack_catalog::{
    aggregate, category_by_slug, normalize, CatalogStore, FileSource, HttpSource,
};
use artstack_core::{CategorySummary, Entry, FilterOptions, Result};
use artstack_query::{filter_options, paginate, query, sort_entries, QuerySpec, SortBy, SortOrder};
use tracing::debug;

/// Catalog query surface consumed by the presentation layer.
#[derive(Clone)]
pub struct CatalogService {
    store: CatalogStore,
    popular_limit: usize,
}

impl CatalogService {
    /// Build a service from resolved configuration.
    pub fn new(config: &Config) -> Self {
        let store = match &config.source {
            CatalogSource::File(path) => CatalogStore::new(FileSource::new(path)),
            CatalogSource::Http(url) => CatalogStore::new(HttpSource::new(url.clone())),
        };
        Self {
            store,
            popular_limit: config.popular_limit,
        }
    }

    /// Build a service from the environment.
    pub fn from_env() -> Self {
        Self::new(&Config::from_env())
    }

    /// Build a service over an existing store (test seam).
    pub fn with_store(store: CatalogStore, popular_limit: usize) -> Self {
        Self {
            store,
            popular_limit,
        }
    }

    /// All normalized entries in traversal order.
    pub async fn get_all_items(&self) -> Result<Vec<Entry>> {
        let doc = self.store.load().await?;
        Ok(normalize(&doc))
    }

    /// Category summaries in first-seen traversal order.
    pub async fn get_categories(&self) -> Result<Vec<CategorySummary>> {
        let entries = self.get_all_items().await?;
        Ok(aggregate(&entries))
    }

    /// Category whose display name slugifies to `slug`, if any.
    pub async fn get_category_by_slug(&self, slug: &str) -> Result<Option<CategorySummary>> {
        let entries = self.get_all_items().await?;
        Ok(category_by_slug(&entries, slug))
    }

    /// Entries matching the spec, filtered and sorted.
    pub async fn search_items(&self, spec: &QuerySpec) -> Result<Vec<Entry>> {
        let entries = self.get_all_items().await?;
        let results = query(&entries, spec);
        debug!(
            subsystem = "service",
            op = "search",
            result_count = results.len(),
        );
        Ok(results)
    }

    /// One page of matching entries. Pages are 1-based; out-of-range pages
    /// come back empty.
    pub async fn search_items_page(
        &self,
        spec: &QuerySpec,
        page: usize,
        page_size: usize,
    ) -> Result<Vec<Entry>> {
        let results = self.search_items(spec).await?;
        Ok(paginate(&results, page, page_size).to_vec())
    }

    /// The `limit` most popular entries. `None` uses the configured
    /// default shelf size.
    pub async fn get_popular_items(&self, limit: Option<usize>) -> Result<Vec<Entry>> {
        let mut entries = self.get_all_items().await?;
        sort_entries(&mut entries, SortBy::Popularity, SortOrder::Descending);
        entries.truncate(limit.unwrap_or(self.popular_limit));
        Ok(entries)
    }

    /// Distinct filter values over the full (unfiltered) collection.
    pub async fn get_filter_options(&self) -> Result<FilterOptions> {
        let entries = self.get_all_items().await?;
        Ok(filter_options(&entries))
    }

    /// Drop the cached document so the next call reloads it (test seam).
    pub async fn invalidate(&self) {
        self.store.invalidate().await;
    }
}
