//! User configuration persistence.
//!
//! Stored in `~/.aockit/config.json`. Command-line flags and the
//! `AOC_SESSION` environment variable take precedence over it.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Could not determine home directory")]
    NoHomeDir,
}

/// User configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// File holding the session token. Falls back to `config/session_id.txt`.
    #[serde(default)]
    pub session_file: Option<PathBuf>,
    /// Root of the download cache.
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,
    /// Debug-level log written on every run.
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
    /// Override for the puzzle site, e.g. a local mirror.
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_cache_dir() -> PathBuf {
    PathBuf::from(aockit_providers::puzzle::DEFAULT_CACHE_ROOT)
}

fn default_log_file() -> PathBuf {
    PathBuf::from("aockit.log")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            session_file: None,
            cache_dir: default_cache_dir(),
            log_file: default_log_file(),
            base_url: None,
        }
    }
}

/// Get the config file path (`~/.aockit/config.json`).
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(".aockit").join("config.json"))
}

/// Load the config from disk.
///
/// Returns the default config if the file doesn't exist or can't be read.
pub fn load_config() -> Config {
    match config_path() {
        Ok(path) => load_config_from(&path).unwrap_or_default(),
        Err(_) => Config::default(),
    }
}

/// Load the config at `path`, or the default if there is no file.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Save the config to `~/.aockit/config.json`.
pub fn save_config(config: &Config) -> Result<(), ConfigError> {
    save_config_to(config, &config_path()?)
}

pub fn save_config_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    // Ensure the directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json)?;

    Ok(())
}
