//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Startup
//!
//! The dataset fetch is spawned on the tokio runtime before the first frame.
//! Its result comes back over the action channel; until then every query
//! control is inert (see `core::action::update`).
//!
//! ## Key Bindings
//!
//! | Key            | Browse mode             | Search mode      |
//! |----------------|-------------------------|------------------|
//! | `/`            | focus search            | types `/`        |
//! | `Enter`        | open selected card      | run search       |
//! | `Esc`          | -                       | back to browse   |
//! | `Tab`          | toggle sort direction   | toggle sort      |
//! | `s`            | apply sort              | types `s`        |
//! | `←` / `p`      | previous page           | -                |
//! | `→` / `n`      | next page               | -                |
//! | `↑` / `↓`      | move card selection     | -                |
//! | `q`            | quit                    | types `q`        |
//! | `Ctrl+C`       | quit                    | quit             |
//!
//! While the detail modal is open it receives every event; only `x` or a
//! click on its close control dismisses it.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::detail::CountryDetail;
use crate::core::state::App;
use crate::source::{CountrySource, RestCountriesSource};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    CardGridState, DetailEvent, DetailModalState, PagerEvent, PagerState, QueryBar, QueryEvent,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys drive paging, sorting, and card selection.
    Browse,
    /// Keys edit the search input.
    Search,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub query_bar: QueryBar,
    pub card_grid: CardGridState,
    pub pager: PagerState,
    pub detail_modal: DetailModalState,
    /// Detail built for the open record, keyed by record index
    pub detail_view: Option<(usize, CountryDetail)>,
    pub input_mode: InputMode,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            query_bar: QueryBar::new(),
            card_grid: CardGridState::new(),
            pager: PagerState::default(),
            detail_modal: DetailModalState::new(),
            detail_view: None,
            input_mode: InputMode::Browse,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

/// Build the dataset source from a resolved config.
pub fn build_source(config: &ResolvedConfig) -> Arc<dyn CountrySource> {
    Arc::new(RestCountriesSource::new(config.endpoint.clone()))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source = build_source(&config);
    let mut app = App::new(config.endpoint.clone());
    let mut tui = TuiState::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    spawn_fetch(source, tx);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    let mut needs_redraw = true; // Force first frame

    loop {
        // Sync QueryBar props with App/TUI state
        tui.query_bar.sort_direction = app.sort_direction;
        tui.query_bar.focused = tui.input_mode == InputMode::Search;

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Short timeout while loading so the fetch result lands promptly
        let timeout = if app.is_loading {
            std::time::Duration::from_millis(100)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(&mut app, &mut tui, event) == Effect::Quit {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (the dataset fetch)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            update(&mut app, action);
            tui.card_grid.reset();
        }
    }

    ratatui::restore();
    Ok(())
}

/// Route one terminal event: modal first, then the focused input, then
/// browse-mode bindings.
fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    // Resize just needs a redraw (already flagged by the caller)
    if event == TuiEvent::Resize {
        return Effect::None;
    }

    // Ctrl+C always quits regardless of mode
    if event == TuiEvent::ForceQuit {
        return update(app, Action::Quit);
    }

    // When the detail modal is open, route all events to it
    if app.is_detail_visible() {
        if let Some(DetailEvent::Close) = tui.detail_modal.handle_event(&event) {
            return update(app, Action::CloseDetail);
        }
        return Effect::None;
    }

    // Tab toggles the sort selector in either mode
    if event == TuiEvent::Tab {
        return update(app, Action::ToggleSortDirection);
    }

    if let TuiEvent::MouseClick(column, row) = event {
        return handle_click(app, tui, column, row);
    }

    match tui.input_mode {
        InputMode::Search => match tui.query_bar.handle_event(&event) {
            Some(QueryEvent::Submit(term)) => {
                tui.input_mode = InputMode::Browse;
                tui.card_grid.reset();
                update(app, Action::Search(term))
            }
            Some(QueryEvent::Blur) => {
                tui.input_mode = InputMode::Browse;
                Effect::None
            }
            None => Effect::None,
        },
        InputMode::Browse => match event {
            TuiEvent::InputChar('q') => update(app, Action::Quit),
            TuiEvent::InputChar('/') => {
                tui.input_mode = InputMode::Search;
                Effect::None
            }
            TuiEvent::InputChar('s') => {
                tui.card_grid.reset();
                update(app, Action::ApplySort)
            }
            TuiEvent::InputChar('p') | TuiEvent::CursorLeft => {
                tui.card_grid.reset();
                update(app, Action::PrevPage)
            }
            TuiEvent::InputChar('n') | TuiEvent::CursorRight => {
                tui.card_grid.reset();
                update(app, Action::NextPage)
            }
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                tui.card_grid.select_prev();
                Effect::None
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                tui.card_grid.select_next(app.catalog.visible().len());
                Effect::None
            }
            TuiEvent::Submit => {
                let selected = app
                    .catalog
                    .visible()
                    .get(tui.card_grid.selected)
                    .map(|(index, _)| *index);
                match selected {
                    Some(index) => open_detail(app, tui, index),
                    None => Effect::None,
                }
            }
            _ => Effect::None,
        },
    }
}

fn handle_click(app: &mut App, tui: &mut TuiState, column: u16, row: u16) -> Effect {
    if let Some(index) = tui.card_grid.hit_test(column, row) {
        return open_detail(app, tui, index);
    }
    match tui.pager.hit_test(column, row) {
        Some(PagerEvent::Prev) => {
            tui.card_grid.reset();
            update(app, Action::PrevPage)
        }
        Some(PagerEvent::Next) => {
            tui.card_grid.reset();
            update(app, Action::NextPage)
        }
        None => Effect::None,
    }
}

fn open_detail(app: &mut App, tui: &mut TuiState, index: usize) -> Effect {
    tui.detail_modal.reset();
    update(app, Action::OpenDetail(index))
}

fn spawn_fetch(source: Arc<dyn CountrySource>, tx: mpsc::Sender<Action>) {
    info!("Spawning dataset fetch via {}", source.name());
    tokio::spawn(async move {
        let action = match source.fetch_all().await {
            Ok(countries) => {
                debug!("Fetch complete: {} records", countries.len());
                Action::CatalogLoaded(countries)
            }
            Err(e) => Action::LoadFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Failed to send fetch result: receiver dropped");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{country, numbered_countries};

    fn loaded(records: Vec<crate::core::country::Country>) -> (App, TuiState) {
        let mut app = App::new("http://test".to_string());
        update(&mut app, Action::CatalogLoaded(records));
        (app, TuiState::new())
    }

    fn type_str(app: &mut App, tui: &mut TuiState, text: &str) {
        for c in text.chars() {
            handle_event(app, tui, TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_slash_search_enter_filters() {
        let (mut app, mut tui) = loaded(vec![country("France"), country("Spain")]);
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('/'));
        assert_eq!(tui.input_mode, InputMode::Search);

        // 'q' and 's' are plain text while searching
        type_str(&mut app, &mut tui, "spa");
        handle_event(&mut app, &mut tui, TuiEvent::Submit);

        assert_eq!(tui.input_mode, InputMode::Browse);
        let names: Vec<&str> = app.catalog.view().map(|c| c.name.common.as_str()).collect();
        assert_eq!(names, vec!["Spain"]);
    }

    #[test]
    fn test_paging_keys() {
        let (mut app, mut tui) = loaded(numbered_countries(30));
        handle_event(&mut app, &mut tui, TuiEvent::CursorRight);
        assert_eq!(app.catalog.page(), 2);
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('n'));
        assert_eq!(app.catalog.page(), 2);
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('p'));
        assert_eq!(app.catalog.page(), 1);
    }

    #[test]
    fn test_enter_opens_selected_card_and_escape_does_not_close() {
        let (mut app, mut tui) = loaded(numbered_countries(30));
        handle_event(&mut app, &mut tui, TuiEvent::CursorDown);
        handle_event(&mut app, &mut tui, TuiEvent::CursorDown);
        handle_event(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(app.detail, Some(2));

        handle_event(&mut app, &mut tui, TuiEvent::Escape);
        assert_eq!(app.detail, Some(2));
        // Paging keys are swallowed by the modal
        handle_event(&mut app, &mut tui, TuiEvent::CursorRight);
        assert_eq!(app.catalog.page(), 1);

        handle_event(&mut app, &mut tui, TuiEvent::InputChar('x'));
        assert!(app.detail.is_none());
    }

    #[test]
    fn test_enter_on_second_page_opens_record_from_that_page() {
        let (mut app, mut tui) = loaded(numbered_countries(30));
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('n'));
        handle_event(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(app.detail, Some(25));
    }

    #[test]
    fn test_click_after_paging_waits_for_redraw() {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        let (mut app, mut tui) = loaded(numbered_countries(30));
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| ui::draw_ui(f, &app, &mut tui)).unwrap();

        let (rect, index) = tui.card_grid.hit_map[0];
        assert_eq!(index, 0);
        let column = tui.card_grid.area.x + rect.x + 1;
        let row = tui.card_grid.area.y + rect.y + 1;

        // Page change and click land in the same batch, before any redraw
        handle_event(&mut app, &mut tui, TuiEvent::CursorRight);
        handle_event(&mut app, &mut tui, TuiEvent::MouseClick(column, row));
        assert_eq!(app.catalog.page(), 2);
        assert!(app.detail.is_none());

        terminal.draw(|f| ui::draw_ui(f, &app, &mut tui)).unwrap();
        handle_event(&mut app, &mut tui, TuiEvent::MouseClick(column, row));
        assert_eq!(app.detail, Some(25));
    }

    #[test]
    fn test_sort_keys() {
        let (mut app, mut tui) = loaded(vec![country("b"), country("a"), country("c")]);
        handle_event(&mut app, &mut tui, TuiEvent::Tab);
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('s'));
        let names: Vec<&str> = app.catalog.view().map(|c| c.name.common.as_str()).collect();
        assert_eq!(names, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_quit_keys() {
        let (mut app, mut tui) = loaded(numbered_countries(1));
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::InputChar('q')), Effect::Quit);
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::ForceQuit), Effect::Quit);
    }
}
