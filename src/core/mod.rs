//! # Core Application Logic
//!
//! This module contains Atlas's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Country (records)    │
//!                    │  • Catalog (view/page)  │
//!                    │  • Detail (expansion)   │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. No network.     │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │   Source   │
//!     │  Adapter   │                          │  (reqwest) │
//!     │ (ratatui)  │                          │            │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`country`]: The `Country` record as decoded from the dataset
//! - [`catalog`]: Pagination, search, and sort over the loaded records
//! - [`detail`]: Expansion of one record into labelled detail lines
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum, everything that can happen in the app
//! - [`config`]: Layered settings (file, env, CLI)

pub mod action;
pub mod catalog;
pub mod config;
pub mod country;
pub mod detail;
pub mod format;
pub mod state;
