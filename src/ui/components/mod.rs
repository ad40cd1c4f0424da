pub mod dialog;
pub mod status_bar;

use crate::app::AppState;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

pub fn render(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Dialog backdrop
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    if state.is_open {
        let area = centered_rect(70, dialog::HEIGHT, chunks[0]);
        dialog::render(f, state, area);
    }

    status_bar::render(f, state, chunks[1]);
}

/// A rect `percent_x` wide and `height` rows tall in the middle of `r`.
fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
