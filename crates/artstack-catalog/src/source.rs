//! Document sources for the catalog store.
//!
//! A [`DocumentSource`] fetches and parses the raw catalog document once;
//! the store decides when (and whether) to call it. File and HTTP sources
//! are provided; tests inject their own implementations.

use artstack_core::{Error, RawCatalogDocument, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// Where the raw catalog document comes from.
///
/// Implementations fetch and parse in one step so every source reports
/// unparsable documents the same way: as [`Error::Load`].
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetch and parse the catalog document.
    async fn fetch(&self) -> Result<RawCatalogDocument>;

    /// Short label for structured logging ("file", "http", ...).
    fn kind(&self) -> &'static str;
}

/// Reads the catalog document from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl DocumentSource for FileSource {
    async fn fetch(&self) -> Result<RawCatalogDocument> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| Error::Load(format!("{}: {}", self.path.display(), e)))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| Error::Load(format!("{}: {}", self.path.display(), e)))
    }

    fn kind(&self) -> &'static str {
        "file"
    }
}

/// Fetches the catalog document over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    async fn fetch(&self) -> Result<RawCatalogDocument> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| Error::Load(format!("{}: {}", self.url, e)))?;
        response
            .json::<RawCatalogDocument>()
            .await
            .map_err(|e| Error::Load(format!("{}: {}", self.url, e)))
    }

    fn kind(&self) -> &'static str {
        "http"
    }
}
