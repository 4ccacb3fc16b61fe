//! # Pager Component
//!
//! Bottom line with the page indicator and clickable prev/next controls:
//! `[◀ Prev]  Page 2 of 10  [Next ▶]`
//!
//! The button rectangles are recorded during render so clicks can be
//! resolved without recomputing the layout.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

const PREV_LABEL: &str = "[◀ Prev]";
const NEXT_LABEL: &str = "[Next ▶]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerEvent {
    Prev,
    Next,
}

/// Button positions from the last render.
#[derive(Debug, Default)]
pub struct PagerState {
    pub prev: Rect,
    pub next: Rect,
}

impl PagerState {
    pub fn hit_test(&self, column: u16, row: u16) -> Option<PagerEvent> {
        let position = Position::new(column, row);
        if self.prev.contains(position) {
            Some(PagerEvent::Prev)
        } else if self.next.contains(position) {
            Some(PagerEvent::Next)
        } else {
            None
        }
    }
}

pub struct Pager<'a> {
    state: &'a mut PagerState,
    page: usize,
    total_pages: usize,
}

impl<'a> Pager<'a> {
    pub fn new(state: &'a mut PagerState, page: usize, total_pages: usize) -> Self {
        Self {
            state,
            page,
            total_pages,
        }
    }

    pub fn indicator(page: usize, total_pages: usize) -> String {
        format!("Page {page} of {total_pages}")
    }
}

impl Component for Pager<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let indicator = Self::indicator(self.page, self.total_pages);
        let gap = "  ";
        let prev_width = PREV_LABEL.width() as u16;
        let next_width = NEXT_LABEL.width() as u16;
        let total_width = prev_width + next_width + (indicator.width() + gap.width() * 2) as u16;

        let start_x = area.x + area.width.saturating_sub(total_width) / 2;
        let next_x = start_x + total_width - next_width;
        self.state.prev = Rect::new(start_x, area.y, prev_width, 1).intersection(area);
        self.state.next = Rect::new(next_x, area.y, next_width, 1).intersection(area);

        let enabled = Style::default().fg(Color::Cyan);
        let disabled = Style::default().fg(Color::DarkGray);
        let prev_style = if self.page > 1 { enabled } else { disabled };
        let next_style = if self.page < self.total_pages {
            enabled
        } else {
            disabled
        };

        let line = Line::from(vec![
            Span::styled(PREV_LABEL, prev_style),
            Span::raw(gap),
            Span::raw(indicator),
            Span::raw(gap),
            Span::styled(NEXT_LABEL, next_style),
        ])
        .centered();
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_indicator_format() {
        assert_eq!(Pager::indicator(2, 10), "Page 2 of 10");
        assert_eq!(Pager::indicator(1, 1), "Page 1 of 1");
    }

    #[test]
    fn test_render_and_hit_test_buttons() {
        let mut terminal = Terminal::new(TestBackend::new(60, 1)).unwrap();
        let mut state = PagerState::default();
        terminal
            .draw(|f| Pager::new(&mut state, 2, 10).render(f, f.area()))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Page 2 of 10"));
        assert!(text.contains("Prev"));
        assert!(text.contains("Next"));

        let prev = state.prev;
        let next = state.next;
        assert_eq!(state.hit_test(prev.x, 0), Some(PagerEvent::Prev));
        assert_eq!(state.hit_test(next.x + next.width - 1, 0), Some(PagerEvent::Next));
        assert_eq!(state.hit_test(prev.x + prev.width + 1, 0), None);
    }
}
