use crate::app::{AppState, Field};
use crate::utils::text::TextInput;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use std::time::Instant;
use unicode_width::UnicodeWidthChar;

/// Rows the dialog needs, borders included.
pub const HEIGHT: u16 = 17;

const NOTE: &str =
    "Your secret will be saved in local storage and deleted after the expiration date.";
const NOTE_HIDDEN: &str = "Note: saved secrets are not visible.";

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Save secret ")
        .style(
            Style::default()
                .bg(state.theme.background)
                .fg(state.theme.foreground),
        );
    let inner = block.inner(area);

    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Notes
            Constraint::Length(3), // Label
            Constraint::Length(3), // Value
            Constraint::Length(3), // Delete after
            Constraint::Length(1), // Actions
            Constraint::Min(0),
        ])
        .split(inner);

    let notes = Paragraph::new(vec![Line::from(NOTE), Line::from(NOTE_HIDDEN)])
        .style(Style::default().fg(state.theme.muted))
        .wrap(Wrap { trim: true });
    f.render_widget(notes, rows[0]);

    render_text_field(
        f,
        state,
        rows[1],
        "Label *",
        &state.label_input,
        Field::Label,
        state.form.label_error(),
        None,
    );

    let badge = copy_badge(state);
    render_text_field(
        f,
        state,
        rows[2],
        "Value *",
        &state.value_input,
        Field::Value,
        state.form.value_error(),
        badge,
    );

    render_expiration(f, state, rows[3]);

    let actions = Line::from(vec![
        Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" Cancel   "),
        Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" Save"),
    ]);
    f.render_widget(Paragraph::new(actions).right_aligned(), rows[4]);
}

fn copy_badge(state: &AppState) -> Option<Span<'static>> {
    if !state.copy.is_available(Some(state.form.draft().value.as_str())) {
        return None;
    }
    if state.copy.is_acknowledged_at(Instant::now()) {
        Some(Span::styled(
            " Copied ✓ ",
            Style::default().fg(state.theme.acknowledged),
        ))
    } else {
        Some(Span::styled(" ^Y copy ", Style::default().fg(state.theme.muted)))
    }
}

fn field_style(state: &AppState, field: Field, error: bool) -> Style {
    if error {
        Style::default().fg(state.theme.error)
    } else if state.focus == field {
        Style::default().fg(state.theme.focus)
    } else {
        Style::default().fg(state.theme.muted)
    }
}

#[allow(clippy::too_many_arguments)]
fn render_text_field(
    f: &mut Frame,
    state: &AppState,
    area: Rect,
    title: &str,
    input: &TextInput,
    field: Field,
    error: bool,
    badge: Option<Span<'static>>,
) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "))
        .border_style(field_style(state, field, error));
    if let Some(badge) = badge {
        block = block.title_bottom(Line::from(badge).right_aligned());
    }

    let inner = block.inner(area);
    let (visible, cursor_col) = visible_window(input, inner.width as usize);

    f.render_widget(block, area);
    f.render_widget(
        Paragraph::new(visible).style(Style::default().fg(state.theme.foreground)),
        inner,
    );

    if state.focus == field {
        f.set_cursor_position(Position::new(inner.x + cursor_col as u16, inner.y));
    }
}

/// Scroll the text so the cursor stays inside `width` columns.
fn visible_window(input: &TextInput, width: usize) -> (String, usize) {
    let text = input.as_str();
    if width == 0 {
        return (String::new(), 0);
    }

    let mut start = 0;
    let mut cursor_col = input.cursor_width();
    let mut chars = text.char_indices();
    while cursor_col >= width {
        match chars.next() {
            Some((i, c)) => {
                start = i + c.len_utf8();
                cursor_col -= c.width().unwrap_or(0);
            }
            None => break,
        }
    }

    let mut shown = String::new();
    let mut used = 0;
    for c in text[start..].chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        shown.push(c);
    }

    (shown, cursor_col)
}

fn render_expiration(f: &mut Frame, state: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Delete after ")
        .border_style(field_style(state, Field::Expiration, false));

    let choice = state.form.draft().expiration;
    let value_style = if state.focus == Field::Expiration {
        Style::default()
            .fg(state.theme.focus)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(state.theme.foreground)
    };
    let line = Line::from(vec![
        Span::raw("◀ "),
        Span::styled(choice.label(), value_style),
        Span::raw(" ▶"),
    ]);

    f.render_widget(Paragraph::new(line).block(block), area);
}
