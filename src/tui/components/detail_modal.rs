//! # Detail Modal Component
//!
//! Overlay with the expanded view of one country. Opened from a card
//! (Enter or click), closed only through its close control: the `x` key or
//! a click on `[ Close (x) ]`. Esc and clicks elsewhere do nothing.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `DetailModalState` lives in `TuiState` (scroll offset, close button rect)
//! - `DetailModal` is created each frame with borrowed state and the detail

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};
use unicode_width::UnicodeWidthStr;

use crate::core::detail::CountryDetail;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const CLOSE_LABEL: &str = "[ Close (x) ]";

/// Events emitted by the detail modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailEvent {
    Close,
}

/// Persistent state for the detail overlay.
#[derive(Default)]
pub struct DetailModalState {
    pub scroll_state: ScrollViewState,
    /// Screen rect of the close control from the last render
    pub close_button: Rect,
    /// Height of the scrollable content from the last render
    content_height: u16,
    viewport_height: u16,
}

impl DetailModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh scroll position for a newly opened record.
    pub fn reset(&mut self) {
        self.scroll_state.scroll_to_top();
        self.close_button = Rect::default();
    }

    fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

impl EventHandler for DetailModalState {
    type Event = DetailEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DetailEvent> {
        match event {
            TuiEvent::InputChar('x') => Some(DetailEvent::Close),
            TuiEvent::MouseClick(column, row)
                if self.close_button.contains(Position::new(*column, *row)) =>
            {
                Some(DetailEvent::Close)
            }
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.clamp_scroll();
                None
            }
            // Esc and stray clicks never dismiss the modal
            _ => None,
        }
    }
}

/// Transient render wrapper for the detail overlay.
pub struct DetailModal<'a> {
    state: &'a mut DetailModalState,
    detail: &'a CountryDetail,
}

impl<'a> DetailModal<'a> {
    pub fn new(state: &'a mut DetailModalState, detail: &'a CountryDetail) -> Self {
        Self { state, detail }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let detail = self.detail;
        let label_style = Style::default().add_modifier(Modifier::BOLD);
        let mut lines = Vec::with_capacity(detail.lines.len() + 2);

        if !detail.flag.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("Flag: ", label_style),
                Span::raw(detail.flag.as_str()),
            ]));
            lines.push(Line::default());
        }

        for line in &detail.lines {
            if line.label.is_empty() {
                lines.push(Line::styled(
                    line.value.as_str(),
                    Style::default().fg(Color::Red),
                ));
            } else {
                lines.push(Line::from(vec![
                    Span::styled(format!("{}: ", line.label), label_style),
                    Span::raw(line.value.as_str()),
                ]));
            }
        }
        lines
    }
}

impl Component for DetailModal<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 80, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {} ", self.detail.title))
            .title_style(Style::default().add_modifier(Modifier::BOLD))
            .padding(Padding::horizontal(1));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        // Close control sits on the bottom border, centered
        let close_width = (CLOSE_LABEL.width() as u16).min(overlay.width);
        self.state.close_button = Rect::new(
            overlay.x + overlay.width.saturating_sub(close_width) / 2,
            overlay.y + overlay.height.saturating_sub(1),
            close_width,
            1,
        );
        frame.render_widget(
            Span::styled(
                CLOSE_LABEL,
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ),
            self.state.close_button,
        );

        // Scrollable body; one column kept for the scrollbar
        let content_width = inner.width.saturating_sub(1);
        let paragraph = Paragraph::new(self.lines()).wrap(Wrap { trim: false });
        let content_height = paragraph.line_count(content_width) as u16;

        self.state.content_height = content_height;
        self.state.viewport_height = inner.height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, content_height));
        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::detail::{PARSE_ERROR_LINE, detail_or_error};
    use crate::test_support::{country, france, france_without_collections};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(detail: &CountryDetail, state: &mut DetailModalState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal
            .draw(|f| DetailModal::new(state, detail).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_detail_lines() {
        let detail = detail_or_error(&france());
        let mut state = DetailModalState::new();
        let text = render(&detail, &mut state);
        assert!(text.contains("France"));
        assert!(text.contains("Official Name: French Republic"));
        assert!(text.contains("Area: 551,695 square kilometers"));
        assert!(text.contains("Currency (EUR): Euro (€)"));
        assert!(text.contains("Close (x)"));
    }

    #[test]
    fn test_renders_placeholders() {
        let detail = detail_or_error(&france_without_collections());
        let mut state = DetailModalState::new();
        let text = render(&detail, &mut state);
        assert!(text.contains("Native Name: N/A"));
        assert!(text.contains("Official Languages: N/A"));
        assert!(text.contains("Currencies: N/A"));
    }

    #[test]
    fn test_renders_error_line() {
        let detail = detail_or_error(&country("Nowhere"));
        let mut state = DetailModalState::new();
        let text = render(&detail, &mut state);
        assert!(text.contains(PARSE_ERROR_LINE));
        assert!(text.contains("Nowhere"));
    }

    #[test]
    fn test_close_only_through_close_control() {
        let detail = detail_or_error(&france());
        let mut state = DetailModalState::new();
        render(&detail, &mut state);

        assert_eq!(state.handle_event(&TuiEvent::Escape), None);
        assert_eq!(state.handle_event(&TuiEvent::MouseClick(0, 0)), None);
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);

        let button = state.close_button;
        assert_eq!(
            state.handle_event(&TuiEvent::MouseClick(button.x + 1, button.y)),
            Some(DetailEvent::Close)
        );
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('x')),
            Some(DetailEvent::Close)
        );
    }

    #[test]
    fn test_scroll_is_clamped_to_content() {
        let detail = detail_or_error(&france());
        let mut state = DetailModalState::new();
        render(&detail, &mut state);
        for _ in 0..50 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        // Content fits in the 40-row overlay, so there is nowhere to scroll
        assert_eq!(state.scroll_state.offset().y, 0);
    }
}
