//! Catalog payload loading
//!
//! The one asynchronous step of a session: obtain the catalog text, parse
//! it, and fall back to the built-in catalog if the text cannot be had.
//! A payload that arrives is always parsed, even when it is empty or
//! entirely malformed; only transport failures trigger the fallback.

use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::catalog::{fallback_catalog, parse, Catalog};
use crate::error::CatalogError;
use crate::settings::DEFAULT_FETCH_TIMEOUT_SECS;

/// Something that can produce the raw catalog text
#[async_trait]
pub trait PayloadSource: Send + Sync {
    /// Fetch the full payload
    async fn fetch(&self) -> Result<String, CatalogError>;

    /// Human-readable location, used in logs and notices
    fn describe(&self) -> String;
}

/// A catalog file on local disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PayloadSource for FileSource {
    async fn fetch(&self) -> Result<String, CatalogError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogError::Read {
                path: self.path.clone(),
                source,
            })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// A catalog served over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[cfg(feature = "remote")]
    async fn fetch_remote(&self) -> Result<String, CatalogError> {
        let fetch_error = |e: reqwest::Error| CatalogError::Fetch {
            url: self.url.clone(),
            source: Box::new(e),
        };

        let client = reqwest::Client::builder()
            .user_agent(concat!("lessons/", env!("CARGO_PKG_VERSION")))
            .timeout(self.timeout)
            .build()
            .map_err(fetch_error)?;

        let response = client.get(&self.url).send().await.map_err(fetch_error)?;

        if !response.status().is_success() {
            return Err(CatalogError::HttpStatus {
                url: self.url.clone(),
                status: response.status().as_u16(),
            });
        }

        response.text().await.map_err(fetch_error)
    }

    /// Stub for when the remote feature is disabled
    #[cfg(not(feature = "remote"))]
    async fn fetch_remote(&self) -> Result<String, CatalogError> {
        Err(CatalogError::RemoteDisabled {
            url: self.url.clone(),
        })
    }
}

#[async_trait]
impl PayloadSource for HttpSource {
    async fn fetch(&self) -> Result<String, CatalogError> {
        self.fetch_remote().await
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// A catalog location chosen from a user-supplied string
#[derive(Debug, Clone)]
pub enum Source {
    File(FileSource),
    Http(HttpSource),
}

impl Source {
    /// `http://` and `https://` locations are fetched, anything else is a path
    pub fn from_location(location: &str, timeout: Duration) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            Source::Http(HttpSource::new(location).with_timeout(timeout))
        } else {
            Source::File(FileSource::new(location))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Source::Http(_))
    }
}

#[async_trait]
impl PayloadSource for Source {
    async fn fetch(&self) -> Result<String, CatalogError> {
        match self {
            Source::File(source) => source.fetch().await,
            Source::Http(source) => source.fetch().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            Source::File(source) => source.describe(),
            Source::Http(source) => source.describe(),
        }
    }
}

/// Where the session's catalog came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// Parsed from the payload at `source`
    Parsed { source: String },
    /// The built-in catalog, because the payload was unavailable
    Fallback { reason: String },
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Parsed { source } => write!(f, "loaded from {source}"),
            Origin::Fallback { reason } => write!(f, "built-in sample catalog ({reason})"),
        }
    }
}

/// A catalog together with how it was obtained
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    pub origin: Origin,
}

impl LoadedCatalog {
    pub fn is_fallback(&self) -> bool {
        matches!(self.origin, Origin::Fallback { .. })
    }
}

/// Fetch and parse the catalog, substituting the fallback on failure
///
/// Never fails: every transport error ends in the built-in catalog.
pub async fn load_catalog(source: &dyn PayloadSource) -> LoadedCatalog {
    let location = source.describe();
    debug!("Loading catalog from {}", location);

    match source.fetch().await {
        Ok(text) => {
            let catalog = parse(&text);
            info!(
                "Catalog loaded from {}: {} units",
                location,
                catalog.unit_count()
            );
            LoadedCatalog {
                catalog,
                origin: Origin::Parsed { source: location },
            }
        }
        Err(e) => {
            warn!("Failed to load catalog from {}: {}", location, e);
            LoadedCatalog {
                catalog: fallback_catalog(),
                origin: Origin::Fallback {
                    reason: e.to_string(),
                },
            }
        }
    }
}
