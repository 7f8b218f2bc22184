//! Process-lifetime cache for the raw catalog document.
//!
//! The document is fetched at most once per process: the first `load()`
//! fetches and caches, every later call returns the cached value. A failed
//! fetch is never cached — the next `load()` retries from scratch.
//! Concurrent callers before the first fetch resolves all await the same
//! in-flight fetch instead of issuing their own.

use crate::source::DocumentSource;
use artstack_core::{RawCatalogDocument, Result};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error, info};

/// Cached catalog document store.
///
/// Cloning is cheap and all clones share the same cache, so a service can
/// hand the store to as many callers as it likes.
#[derive(Clone)]
pub struct CatalogStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    source: Box<dyn DocumentSource>,
    /// Written exactly once per successful fetch, thereafter only read.
    cached: RwLock<Option<Arc<RawCatalogDocument>>>,
    /// Serializes fetch attempts so at most one is in flight.
    fetch_lock: Mutex<()>,
}

impl CatalogStore {
    /// Create a store over the given document source. Nothing is fetched
    /// until the first `load()`.
    pub fn new(source: impl DocumentSource + 'static) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                source: Box::new(source),
                cached: RwLock::new(None),
                fetch_lock: Mutex::new(()),
            }),
        }
    }

    /// Return the catalog document, fetching it on first use.
    ///
    /// All concurrent callers during the initial fetch receive the same
    /// resolved document or the same failure. A failure leaves the cache
    /// empty, so a later call attempts a fresh fetch.
    pub async fn load(&self) -> Result<Arc<RawCatalogDocument>> {
        if let Some(doc) = self.inner.cached.read().await.clone() {
            debug!(subsystem = "catalog", op = "load", cache_hit = true);
            return Ok(doc);
        }

        let _guard = self.inner.fetch_lock.lock().await;

        // A concurrent caller may have populated the cache while this one
        // waited on the fetch lock.
        if let Some(doc) = self.inner.cached.read().await.clone() {
            return Ok(doc);
        }

        debug!(
            subsystem = "catalog",
            op = "load",
            cache_hit = false,
            source_kind = self.inner.source.kind(),
        );

        match self.inner.source.fetch().await {
            Ok(doc) => {
                let doc = Arc::new(doc);
                *self.inner.cached.write().await = Some(doc.clone());
                info!(
                    subsystem = "catalog",
                    op = "load",
                    source_kind = self.inner.source.kind(),
                    "catalog document loaded"
                );
                Ok(doc)
            }
            Err(e) => {
                error!(
                    subsystem = "catalog",
                    op = "load",
                    error = %e,
                    "catalog load failed"
                );
                Err(e)
            }
        }
    }

    /// Drop the cached document so the next `load()` fetches fresh.
    ///
    /// The running system never invalidates; this exists so tests can
    /// substitute a fresh document without cross-test leakage.
    pub async fn invalidate(&self) {
        *self.inner.cached.write().await = None;
    }
}
