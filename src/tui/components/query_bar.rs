//! # QueryBar Component
//!
//! The search input and the sort selector, side by side.
//!
//! ```text
//! ┌ Search (/) ───────────────────────────┐┌ Sort (Tab, s) ┐
//! │fren█                                  ││ A → Z         │
//! └───────────────────────────────────────┘└───────────────┘
//! ```
//!
//! `QueryBar` owns the search buffer and its focus flag. The sort direction
//! is a prop from core state; toggling and applying it are core actions.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::catalog::SortDirection;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Events emitted by the query bar while focused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryEvent {
    /// Run the search with this term.
    Submit(String),
    /// Leave the input without searching.
    Blur,
}

pub struct QueryBar {
    pub buffer: String,
    pub focused: bool,
    /// Prop: current sort selector value.
    pub sort_direction: SortDirection,
}

impl Default for QueryBar {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryBar {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            focused: false,
            sort_direction: SortDirection::default(),
        }
    }
}

impl EventHandler for QueryBar {
    type Event = QueryEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<QueryEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                None
            }
            TuiEvent::Paste(text) => {
                // Single-line input
                self.buffer
                    .extend(text.chars().filter(|c| *c != '\n' && *c != '\r'));
                None
            }
            TuiEvent::Backspace => {
                self.buffer.pop();
                None
            }
            TuiEvent::Submit => Some(QueryEvent::Submit(self.buffer.clone())),
            TuiEvent::Escape => Some(QueryEvent::Blur),
            _ => None,
        }
    }
}

impl Component for QueryBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [search_area, sort_area] =
            Layout::horizontal([Constraint::Min(10), Constraint::Length(17)]).areas(area);

        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let search = Paragraph::new(self.buffer.as_str()).block(
            Block::bordered()
                .title(" Search (/) ")
                .border_style(border_style),
        );
        frame.render_widget(search, search_area);

        if self.focused {
            let inner_width = search_area.width.saturating_sub(2);
            let cursor_x = (self.buffer.width() as u16).min(inner_width.saturating_sub(1));
            frame.set_cursor_position(Position::new(search_area.x + 1 + cursor_x, search_area.y + 1));
        }

        let sort = Paragraph::new(format!(" {}", self.sort_direction.label())).block(
            Block::bordered()
                .title(" Sort (Tab, s) ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(sort, sort_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_typing_and_submit() {
        let mut bar = QueryBar::new();
        for c in "Fra".chars() {
            assert_eq!(bar.handle_event(&TuiEvent::InputChar(c)), None);
        }
        bar.handle_event(&TuiEvent::Backspace);
        assert_eq!(
            bar.handle_event(&TuiEvent::Submit),
            Some(QueryEvent::Submit("Fr".to_string()))
        );
    }

    #[test]
    fn test_paste_strips_newlines() {
        let mut bar = QueryBar::new();
        bar.handle_event(&TuiEvent::Paste("New\nZealand\r\n".to_string()));
        assert_eq!(bar.buffer, "NewZealand");
    }

    #[test]
    fn test_escape_blurs_and_keeps_buffer() {
        let mut bar = QueryBar::new();
        bar.handle_event(&TuiEvent::InputChar('x'));
        assert_eq!(bar.handle_event(&TuiEvent::Escape), Some(QueryEvent::Blur));
        assert_eq!(bar.buffer, "x");
    }

    #[test]
    fn test_render_shows_buffer_and_direction() {
        let backend = TestBackend::new(60, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut bar = QueryBar::new();
        bar.buffer = "peru".to_string();
        bar.sort_direction = SortDirection::Descending;
        terminal
            .draw(|f| {
                bar.render(f, f.area());
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("peru"));
        assert!(text.contains("Z → A"));
        assert!(text.contains("Search"));
    }
}
