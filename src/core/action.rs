//! # Actions
//!
//! Everything that can happen in Atlas becomes an `Action`.
//! User presses `n`? That's `Action::NextPage`.
//! The dataset arrives? That's `Action::CatalogLoaded(records)`.
//!
//! The `update()` function takes the current state and an action,
//! then mutates it in place. No I/O here beyond logging.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! Query actions (search, sort, paging, detail) are ignored until the
//! catalog has loaded, so nothing acts on a half-initialized state.

use log::{debug, error, info};

use crate::core::catalog::Catalog;
use crate::core::country::Country;
use crate::core::state::App;

#[derive(Debug)]
pub enum Action {
    CatalogLoaded(Vec<Country>),
    LoadFailed(String),
    Search(String),
    ToggleSortDirection,
    ApplySort,
    PrevPage,
    NextPage,
    OpenDetail(usize),
    CloseDetail,
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Quit => return Effect::Quit,
        Action::CatalogLoaded(records) => {
            info!("Catalog loaded: {} countries", records.len());
            app.catalog = Catalog::new(records);
            app.is_loading = false;
            app.loaded = true;
            app.error = None;
            app.status_message = format!("Loaded {} countries", app.catalog.len());
            return Effect::None;
        }
        Action::LoadFailed(message) => {
            error!("Failed to load countries from {}: {}", app.endpoint, message);
            app.is_loading = false;
            app.status_message = format!("Failed to load countries: {message}");
            app.error = Some(message);
            return Effect::None;
        }
        _ => {}
    }

    if !app.loaded {
        debug!("Ignoring {:?} before catalog load", action);
        return Effect::None;
    }

    match action {
        Action::Search(term) => {
            app.catalog = app.catalog.search(&term);
            app.status_message = if term.is_empty() {
                format!("Showing all {} countries", app.catalog.view_len())
            } else {
                format!("{} matches for \"{}\"", app.catalog.view_len(), term)
            };
            info!("Search \"{}\": {} matches", term, app.catalog.view_len());
            app.search_term = term;
        }
        Action::ToggleSortDirection => {
            app.sort_direction = app.sort_direction.toggle();
            app.status_message = format!("Sort: {}", app.sort_direction.label());
        }
        Action::ApplySort => {
            app.catalog = app.catalog.sort(app.sort_direction);
            app.status_message = format!("Sorted {}", app.sort_direction.label());
            info!("Sorted {} records {:?}", app.catalog.view_len(), app.sort_direction);
        }
        Action::PrevPage => {
            app.catalog = app.catalog.prev_page();
        }
        Action::NextPage => {
            app.catalog = app.catalog.next_page();
        }
        Action::OpenDetail(index) => {
            if app.detail.is_some() {
                debug!("Detail already open, ignoring open for {}", index);
            } else if let Some(country) = app.catalog.get(index) {
                debug!("Opening detail for {}", country.name.common);
                app.detail = Some(index);
            }
        }
        Action::CloseDetail => {
            app.detail = None;
        }
        // Lifecycle actions returned early above.
        Action::Quit | Action::CatalogLoaded(_) | Action::LoadFailed(_) => {}
    }
    Effect::None
}
