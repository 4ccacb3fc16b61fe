//! # TitleBar Component
//!
//! Top status line: app name, how many records are in view, and the latest
//! status message ("Loading countries...", "12 matches for \"fr\"").
//!
//! Purely presentational. All data arrives as props:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.status_message.clone(), shown, total);
//! title_bar.render(frame, title_area);
//! ```
//!
//! Formatting by priority:
//!
//! 1. **Nothing loaded**: `"Atlas | Loading countries..."`
//! 2. **Filtered view**: `"Atlas | 12 of 250 countries | 12 matches for \"fr\""`
//! 3. **Full view**: `"Atlas | 250 countries | Loaded 250 countries"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Status message (e.g., "Loading countries...", "Sorted A → Z")
    pub status_message: String,
    /// Records in the active view
    pub shown: usize,
    /// Records loaded in total
    pub total: usize,
}

impl TitleBar {
    pub fn new(status_message: String, shown: usize, total: usize) -> Self {
        Self {
            status_message,
            shown,
            total,
        }
    }

    fn text(&self) -> String {
        let count = if self.total == 0 {
            None
        } else if self.shown == self.total {
            Some(format!("{} countries", self.total))
        } else {
            Some(format!("{} of {} countries", self.shown, self.total))
        };

        match (count, self.status_message.is_empty()) {
            (None, true) => "Atlas".to_string(),
            (None, false) => format!("Atlas | {}", self.status_message),
            (Some(count), true) => format!("Atlas | {count}"),
            (Some(count), false) => format!("Atlas | {} | {}", count, self.status_message),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}
