use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::utils::paths::get_config_path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Show the copy control on the value field.
    #[serde(default = "default_show_copy")]
    pub show_copy: bool,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_theme() -> String {
    "default".to_string()
}

fn default_show_copy() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            show_copy: default_show_copy(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&get_config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }
}
