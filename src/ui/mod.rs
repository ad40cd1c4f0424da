pub mod components;
pub mod theme;

use crate::app::{AppState, event::handle_key_event};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write};
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = io::stderr();
        let _ = disable_raw_mode();
        let _ = execute!(out, LeaveAlternateScreen);
        let _ = out.flush();
    }
}

/// Run the dialog on stderr until it is saved or cancelled, leaving stdout
/// free for the result. The caller reads `state.outcome` afterwards.
pub fn run_tui(state: &mut AppState) -> Result<()> {
    enable_raw_mode()?;
    let _guard = TerminalGuard;
    let mut out = io::stderr();
    execute!(out, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(out);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, state);
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stderr>>,
    state: &mut AppState,
) -> Result<()> {
    loop {
        state.tick(Instant::now());

        terminal.draw(|f| {
            components::render(f, state);
        })?;

        if event::poll(state.poll_timeout(Instant::now(), POLL_INTERVAL))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key_event(key, state);
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
