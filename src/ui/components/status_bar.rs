use crate::app::AppState;
use crate::secret::DraftStatus;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let invalid = state.is_open && state.form.status() == DraftStatus::Invalid;

    let left_content = if invalid {
        format!(" {} | Label and value are required", state.focus)
    } else {
        format!(" {}", state.focus)
    };
    let hints = "Tab next  ^Y copy  Enter save  Esc cancel";
    let version_text = format!("v{VERSION}");

    let padding = area.width.saturating_sub(
        left_content.chars().count() as u16 + hints.len() as u16 + version_text.len() as u16 + 3,
    );

    let base_style = Style::default()
        .fg(state.theme.status_bar_fg)
        .bg(state.theme.status_bar_bg);
    let style = if invalid {
        base_style.add_modifier(Modifier::BOLD)
    } else {
        base_style
    };

    let status_line = format!(
        "{} {} {:>padding$} {}",
        left_content,
        hints,
        "",
        version_text,
        padding = padding as usize
    );

    f.render_widget(Paragraph::new(Line::from(vec![Span::styled(status_line, style)])), area);
}
