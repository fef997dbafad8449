//! Catalog store - the browser's view and search state
//!
//! Holds the immutable [`Catalog`] for the session together with the
//! mutable view state the presentation layer renders from:
//!
//! ```text
//!            select_unit                 search
//!   Units ──────────────▶ Lessons ──────────────▶ SearchResults
//!     ▲                      │                         │
//!     └── show_units / clear_search ◀──────────────────┘
//! ```
//!
//! Every state is reachable from every other; none is terminal. After each
//! successful mutation a [`ViewSnapshot`] is published on a watch channel,
//! so callers can either poll the getters or await changes.

use tokio::sync::watch;
use tracing::debug;

use crate::catalog::{Catalog, Lesson, Unit};
use crate::error::CatalogError;

/// Which list the presentation layer should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Units,
    Lessons,
    SearchResults,
}

/// Summary of the view state published after each mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewSnapshot {
    pub view: View,
    pub unit_number: Option<u32>,
    pub result_count: usize,
}

/// Session state: one catalog plus the current view over it
#[derive(Debug)]
pub struct CatalogStore {
    catalog: Catalog,
    view: View,
    /// Index into `catalog.units()`
    current_unit: Option<usize>,
    search_results: Vec<Lesson>,
    last_query: Option<String>,
    changes: watch::Sender<ViewSnapshot>,
}

impl CatalogStore {
    /// Wrap a catalog, starting on the units view
    pub fn new(catalog: Catalog) -> Self {
        let (changes, _) = watch::channel(ViewSnapshot::default());
        Self {
            catalog,
            view: View::Units,
            current_unit: None,
            search_results: Vec::new(),
            last_query: None,
            changes,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Units in catalog order
    pub fn list_units(&self) -> &[Unit] {
        self.catalog.units()
    }

    pub fn current_view(&self) -> View {
        self.view
    }

    pub fn current_unit(&self) -> Option<&Unit> {
        self.current_unit.map(|index| &self.catalog.units()[index])
    }

    /// Results of the last search, kept until the next search or clear
    pub fn search_results(&self) -> &[Lesson] {
        &self.search_results
    }

    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    /// Current state as a snapshot
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            view: self.view,
            unit_number: self.current_unit().map(|unit| unit.number),
            result_count: self.search_results.len(),
        }
    }

    /// Receive a snapshot after every state change
    pub fn subscribe(&self) -> watch::Receiver<ViewSnapshot> {
        self.changes.subscribe()
    }

    /// Open a unit's lesson list
    ///
    /// With duplicate unit numbers the first unit in catalog order is
    /// selected. A missing unit leaves the state untouched.
    pub fn select_unit(&mut self, number: u32) -> Result<&Unit, CatalogError> {
        let index = self
            .catalog
            .units()
            .iter()
            .position(|unit| unit.number == number)
            .ok_or(CatalogError::UnitNotFound { number })?;

        self.current_unit = Some(index);
        self.view = View::Lessons;
        debug!(unit = number, "Selected unit");
        self.publish();

        Ok(&self.catalog.units()[index])
    }

    /// Find lessons matching `query` and switch to the results view
    ///
    /// No minimum length is enforced here; an empty query matches every
    /// lesson. The selected unit is left as it was.
    pub fn search(&mut self, query: &str) -> &[Lesson] {
        self.search_results = self.catalog.search(query);
        self.last_query = Some(query.to_string());
        self.view = View::SearchResults;
        debug!(query, results = self.search_results.len(), "Searched lessons");
        self.publish();

        &self.search_results
    }

    /// Drop the search and return to the units view
    pub fn clear_search(&mut self) {
        self.search_results.clear();
        self.last_query = None;
        self.show_units();
    }

    /// Return to the units view, keeping any search results
    pub fn show_units(&mut self) {
        self.view = View::Units;
        self.current_unit = None;
        self.publish();
    }

    fn publish(&self) {
        self.changes.send_replace(self.snapshot());
    }
}
