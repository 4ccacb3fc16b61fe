//! # CardGrid Component
//!
//! The visible slice of the catalog as a grid of bordered cards.
//!
//! ```text
//! ┌ 🇫🇷 France ──────────────┐┌ 🇩🇪 Germany ─────────────┐
//! │Population: 67,391,582    ││Population: 83,240,525    │
//! │Region: Europe            ││Region: Europe            │
//! │Capital: Paris            ││Capital: Berlin           │
//! └──────────────────────────┘└──────────────────────────┘
//! ```
//!
//! Column count follows the terminal width. Rows that don't fit scroll
//! inside a `ScrollView`, which keeps the keyboard-selected card in view.
//!
//! Every render rebuilds all cards and the hit map from scratch. The hit
//! map pairs each card's canvas rectangle with the index of the record it
//! shows, so a click resolves straight to a record in the catalog.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Widget};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};
use unicode_width::UnicodeWidthChar;

use crate::core::country::Country;
use crate::core::format::format_number;
use crate::tui::component::Component;

pub const MIN_CARD_WIDTH: u16 = 28;
pub const CARD_HEIGHT: u16 = 5;

/// Selection, scroll, and hit map for the card grid.
/// Must be persisted in the parent TuiState.
pub struct CardGridState {
    /// Position of the selected card within the visible slice
    pub selected: usize,
    pub scroll_state: ScrollViewState,
    /// Card rectangles (canvas coordinates) and the record index each shows
    pub hit_map: Vec<(Rect, usize)>,
    /// Screen area of the last render
    pub area: Rect,
    pub columns: u16,
}

impl Default for CardGridState {
    fn default() -> Self {
        Self::new()
    }
}

impl CardGridState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            scroll_state: ScrollViewState::default(),
            hit_map: Vec::new(),
            area: Rect::default(),
            columns: 1,
        }
    }

    /// Back to the first card, scrolled to the top. Called whenever the
    /// visible slice changes (paging, search, sort). The hit map is dropped
    /// too: it names records from the old slice until the next render.
    pub fn reset(&mut self) {
        self.selected = 0;
        self.scroll_state.scroll_to_top();
        self.hit_map.clear();
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self, card_count: usize) {
        if card_count > 0 {
            self.selected = (self.selected + 1).min(card_count - 1);
        }
    }

    /// Record index under a screen position, if any card is there.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        if !self.area.contains(Position::new(column, row)) {
            return None;
        }
        let offset = self.scroll_state.offset();
        let canvas = Position::new(column - self.area.x + offset.x, row - self.area.y + offset.y);
        self.hit_map
            .iter()
            .find(|(rect, _)| rect.contains(canvas))
            .map(|(_, index)| *index)
    }

    /// Scroll so the selected card's row is fully visible.
    fn scroll_to_selected(&mut self, canvas_height: u16) {
        let columns = self.columns.max(1) as usize;
        let top = (self.selected / columns) as u16 * CARD_HEIGHT;
        let bottom = top + CARD_HEIGHT;
        let offset_y = self.scroll_state.offset().y;
        let viewport = self.area.height;

        let new_y = if top < offset_y {
            top
        } else if bottom > offset_y + viewport {
            bottom.saturating_sub(viewport)
        } else {
            offset_y
        };
        let max_y = canvas_height.saturating_sub(viewport);
        self.scroll_state.set_offset(Position {
            x: 0,
            y: new_y.min(max_y),
        });
    }
}

/// Transient render wrapper: borrows the persistent state plus the cards to
/// draw this frame.
pub struct CardGrid<'a> {
    state: &'a mut CardGridState,
    cards: &'a [(usize, &'a Country)],
}

impl<'a> CardGrid<'a> {
    pub fn new(state: &'a mut CardGridState, cards: &'a [(usize, &'a Country)]) -> Self {
        Self { state, cards }
    }
}

impl Component for CardGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.area = area;
        self.state.hit_map.clear();

        if self.cards.is_empty() {
            let empty = Paragraph::new("No countries to show.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        // One column reserved for the scrollbar
        let content_width = area.width.saturating_sub(1);
        let columns = (content_width / MIN_CARD_WIDTH).max(1);
        let card_width = (content_width / columns).max(1);
        let rows = self.cards.len().div_ceil(columns as usize) as u16;
        let canvas_height = rows * CARD_HEIGHT;

        self.state.columns = columns;
        self.state.selected = self.state.selected.min(self.cards.len() - 1);

        let mut scroll_view = ScrollView::new(Size::new(content_width, canvas_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (position, (index, country)) in self.cards.iter().enumerate() {
            let col = position as u16 % columns;
            let row = position as u16 / columns;
            let rect = Rect::new(col * card_width, row * CARD_HEIGHT, card_width, CARD_HEIGHT);
            scroll_view.render_widget(Card::new(country, position == self.state.selected), rect);
            self.state.hit_map.push((rect, *index));
        }

        self.state.scroll_to_selected(canvas_height);
        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

/// A single country card.
struct Card<'a> {
    country: &'a Country,
    selected: bool,
}

impl<'a> Card<'a> {
    fn new(country: &'a Country, selected: bool) -> Self {
        Self { country, selected }
    }
}

impl Widget for Card<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border_style, title_style) = if self.selected {
            (
                Style::default().fg(Color::Cyan),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )
        } else {
            (
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )
        };

        let inner_width = area.width.saturating_sub(2) as usize;
        let flag = self.country.flag_label();
        let heading = if flag.is_empty() {
            format!(" {} ", self.country.name.common)
        } else {
            format!(" {} {} ", flag, self.country.name.common)
        };

        let lines = vec![
            Line::from(truncate_to_width(
                &format!("Population: {}", format_number(self.country.population)),
                inner_width,
            )),
            Line::from(truncate_to_width(
                &format!("Region: {}", self.country.region.as_deref().unwrap_or("")),
                inner_width,
            )),
            Line::from(truncate_to_width(
                &format!("Capital: {}", self.country.capital.join(", ")),
                inner_width,
            )),
        ];

        Paragraph::new(lines)
            .block(
                Block::bordered()
                    .title(truncate_to_width(&heading, inner_width))
                    .title_style(title_style)
                    .border_style(border_style),
            )
            .render(area, buf);
    }
}

/// Truncate to at most `max_width` display cells, ending in "…" when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
