//! Catalog error types
//!
//! Only two kinds of failure exist: a unit lookup that misses, and a
//! payload that could not be obtained. Parsing itself never fails.

use std::path::PathBuf;
use thiserror::Error;

/// Recoverable catalog errors
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No unit with this number exists in the catalog
    #[error("Unit {number} not found in catalog")]
    UnitNotFound { number: u32 },

    /// The HTTP request for the payload failed before a response arrived
    #[error("Failed to fetch catalog from {url}")]
    Fetch {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The server answered with a non-success status
    #[error("Failed to fetch catalog: HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    /// The local payload file could not be read
    #[error("Failed to read catalog file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A remote location was requested but HTTP support is compiled out
    #[error("Remote catalog {url} requested but the `remote` feature is not enabled")]
    RemoteDisabled { url: String },
}
