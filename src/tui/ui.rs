use log::debug;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::detail::detail_or_error;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CardGrid, DetailModal, Pager, TitleBar};

/// Screen regions, top to bottom: title, query bar, cards, pager.
pub fn main_layout(area: Rect) -> [Rect; 4] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Length(3), Min(0), Length(1)]).areas(area)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let [title_area, query_area, main_area, pager_area] = main_layout(frame.area());

    let mut title_bar = TitleBar::new(
        app.status_message.clone(),
        app.catalog.view_len(),
        app.catalog.len(),
    );
    title_bar.render(frame, title_area);

    tui.query_bar.render(frame, query_area);

    // Main area - show error, loading, OR the cards
    if let Some(error_msg) = &app.error {
        draw_error_view(frame, main_area, error_msg);
    } else if app.is_loading {
        draw_loading_view(frame, main_area, &app.endpoint);
    } else {
        let cards = app.catalog.visible();
        CardGrid::new(&mut tui.card_grid, &cards).render(frame, main_area);
    }

    Pager::new(&mut tui.pager, app.catalog.page(), app.catalog.total_pages())
        .render(frame, pager_area);

    match app.detail {
        Some(index) => {
            let Some(country) = app.catalog.get(index) else {
                return;
            };
            // Build once per open; a failing record logs a single warning
            let stale = tui.detail_view.as_ref().is_none_or(|(cached, _)| *cached != index);
            if stale {
                debug!("Building detail view for record {}", index);
                tui.detail_view = Some((index, detail_or_error(country)));
            }
            if let Some((_, detail)) = &tui.detail_view {
                DetailModal::new(&mut tui.detail_modal, detail).render(frame, frame.area());
            }
        }
        None => tui.detail_view = None,
    }
}

fn draw_error_view(frame: &mut Frame, area: Rect, error_msg: &str) {
    let error_paragraph = Paragraph::new(error_msg)
        .block(Block::bordered().title("ERROR"))
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(error_paragraph, area);
}

fn draw_loading_view(frame: &mut Frame, area: Rect, endpoint: &str) {
    let loading = Paragraph::new(format!("Fetching countries from {endpoint}..."))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(loading, area);
}
