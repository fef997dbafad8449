//! Lesson catalog library exports
//!
//! Parses the line-oriented lesson catalog, holds the browser's view and
//! search state, and loads the catalog payload at startup.

pub mod catalog;
pub mod error;
pub mod loader;
pub mod present;
pub mod settings;
pub mod store;

pub use catalog::{fallback_catalog, parse, Catalog, Lesson, Unit};
pub use error::CatalogError;
pub use loader::{
    load_catalog, FileSource, HttpSource, LoadedCatalog, Origin, PayloadSource, Source,
};
pub use settings::{Settings, Theme};
pub use store::{CatalogStore, View, ViewSnapshot};
