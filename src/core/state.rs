//! # Application State
//!
//! Core business state for Atlas. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Catalog              // records, active view, page
//! ├── endpoint: String              // where the dataset comes from
//! ├── status_message: String        // status bar text
//! ├── is_loading: bool              // waiting for the fetch
//! ├── loaded: bool                  // fetch succeeded, controls are live
//! ├── error: Option<String>         // fetch failure
//! ├── sort_direction: SortDirection // sort selector value
//! ├── search_term: String           // last applied search
//! └── detail: Option<usize>         // open modal: record index
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::catalog::{Catalog, SortDirection};

pub struct App {
    pub catalog: Catalog,
    pub endpoint: String,
    pub status_message: String,
    pub is_loading: bool,
    pub loaded: bool,
    pub error: Option<String>,
    pub sort_direction: SortDirection,
    pub search_term: String,
    /// Record index shown in the detail modal. `None` = modal hidden.
    pub detail: Option<usize>,
}

impl App {
    pub fn new(endpoint: String) -> Self {
        Self {
            catalog: Catalog::default(),
            endpoint,
            status_message: String::from("Loading countries..."),
            is_loading: true,
            loaded: false,
            error: None,
            sort_direction: SortDirection::default(),
            search_term: String::new(),
            detail: None,
        }
    }

    pub fn is_detail_visible(&self) -> bool {
        self.detail.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_new_defaults() {
        let app = App::new("http://localhost/all".to_string());
        assert_eq!(app.status_message, "Loading countries...");
        assert!(app.is_loading);
        assert!(!app.loaded);
        assert!(!app.is_detail_visible());
        assert!(app.catalog.is_empty());
        assert_eq!(app.endpoint, "http://localhost/all");
    }
}
