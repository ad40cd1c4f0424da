use crate::config::Config;
use crate::utils::paths::{ensure_stash_dir, get_log_path};
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt};

/// Send tracing output to the log file; the terminal belongs to the dialog.
/// `RUST_LOG` overrides the configured level.
pub fn init(config: &Config) -> Result<()> {
    ensure_stash_dir()?;
    let path = get_log_path()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to install log subscriber")?;

    Ok(())
}
