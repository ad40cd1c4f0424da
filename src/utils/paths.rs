use anyhow::{Result, anyhow};
use std::fs;
use std::path::PathBuf;

pub fn get_stash_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(".secret-stash"))
}

pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_stash_dir()?.join("config.toml"))
}

pub fn get_log_path() -> Result<PathBuf> {
    Ok(get_stash_dir()?.join("stash.log"))
}

pub fn ensure_stash_dir() -> Result<PathBuf> {
    let dir = get_stash_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}
