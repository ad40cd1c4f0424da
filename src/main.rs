use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use secret_stash::app::{AppState, DialogOutcome};
use secret_stash::cli::{Cli, Commands};
use secret_stash::clipboard::SystemClipboard;
use secret_stash::config::Config;
use secret_stash::copy::CopyAffordance;
use secret_stash::logging;
use secret_stash::secret::ExpirationChoice;
use secret_stash::ui::{self, theme::Theme};
use std::io::{self, Read};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    if let Err(e) = logging::init(&config) {
        eprintln!("Logging disabled: {e:#}");
    }

    match cli.command.unwrap_or_default() {
        Commands::Save { value, stdin } => {
            let initial = if stdin {
                read_stdin_value()?
            } else {
                value.unwrap_or_default()
            };
            handle_save(&config, &initial)?;
        }
        Commands::Expiry { choice } => {
            handle_expiry(choice)?;
        }
    }

    Ok(())
}

fn handle_save(config: &Config, initial: &str) -> Result<()> {
    let copy = CopyAffordance::new(Box::new(SystemClipboard::default()), config.show_copy);
    let mut state = AppState::new(copy, Theme::from_config(config));
    state.open(initial);

    ui::run_tui(&mut state)?;

    if let Some(DialogOutcome::Saved(secret)) = state.outcome {
        println!("{}", serde_json::to_string_pretty(&secret)?);
    }

    Ok(())
}

fn handle_expiry(choice: ExpirationChoice) -> Result<()> {
    let expiration = choice
        .expires_at(&Local::now())
        .context("Failed to compute expiration")?;
    println!("{}", expiration.to_rfc3339());
    Ok(())
}

fn read_stdin_value() -> Result<String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read value from stdin")?;

    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(buf)
}
