//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top status line with record counts and status
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `QueryBar`: Search input and sort selector
//! - `CardGrid`: The visible page of country cards, with a click hit map
//! - `Pager`: Page indicator with prev/next controls
//! - `DetailModal`: Scrollable overlay with one country's details
//!
//! Stateful components follow the persistent state + transient wrapper
//! pattern: the `*State` struct lives in `TuiState`, and the wrapper is built
//! each frame from borrowed state plus props.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status line)
//! ├── query_bar.rs     (Search + sort selector)
//! ├── card_grid.rs     (Country cards)
//! ├── pager.rs         (Page X of Y)
//! └── detail_modal.rs  (Detail overlay)
//! ```

pub mod card_grid;
pub mod detail_modal;
pub mod pager;
pub mod query_bar;
mod title_bar;

pub use card_grid::{CardGrid, CardGridState};
pub use detail_modal::{DetailEvent, DetailModal, DetailModalState};
pub use pager::{Pager, PagerEvent, PagerState};
pub use query_bar::{QueryBar, QueryEvent};
pub use title_bar::TitleBar;
