use super::mode::Field;
use super::state::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) {
    if !state.is_open {
        return;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => {
            state.copy_value();
            return;
        }
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => {
            state.cancel();
            return;
        }
        _ => {}
    }

    // Any other key counts as clicking away from the copy badge
    state.copy.dismiss();

    match key.code {
        KeyCode::Enter => {
            state.save();
        }
        KeyCode::Tab | KeyCode::Down => {
            state.focus = state.focus.next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.focus = state.focus.prev();
        }
        _ => match state.focus {
            Field::Expiration => handle_expiration_key(key, state),
            Field::Label | Field::Value => handle_text_key(key, state),
        },
    }
}

fn handle_expiration_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => state.prev_expiration(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => state.next_expiration(),
        _ => {}
    }
}

fn handle_text_key(key: KeyEvent, state: &mut AppState) {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return;
    }
    let Some(input) = state.focused_input_mut() else {
        return;
    };

    let changed = match key.code {
        KeyCode::Char(c) => {
            input.insert(c);
            true
        }
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => {
            input.move_left();
            false
        }
        KeyCode::Right => {
            input.move_right();
            false
        }
        KeyCode::Home => {
            input.home();
            false
        }
        KeyCode::End => {
            input.end();
            false
        }
        _ => false,
    };

    if changed {
        state.commit_focused_input();
    }
}
