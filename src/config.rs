//! Configuration loading and management.
//!
//! Configuration is loaded from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. `.sql-splitter.toml` in current directory
//! 4. `~/.config/sql-splitter/config.toml`
//! 5. Default values
//!
//! # Configuration File Format
//!
//! ```toml
//! [history]
//! file = "/home/me/.config/sql-splitter/history.json"
//! max_entries = 100
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `SQL_SPLITTER_HISTORY` | Path of the history file |
//! | `SQL_SPLITTER_MAX_HISTORY` | Number of statements kept in history |

use std::{
    env, fs,
    path::{Path, PathBuf}
};

use serde::Deserialize;

use crate::{
    error::{AppResult, config_error},
    history::DEFAULT_MAX_ENTRIES
};

/// Environment variable overriding the history file path
pub const HISTORY_FILE_ENV: &str = "SQL_SPLITTER_HISTORY";

/// Environment variable overriding the history cap
pub const MAX_HISTORY_ENV: &str = "SQL_SPLITTER_MAX_HISTORY";

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub history: HistoryConfig
}

/// History configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// History file, defaults to `~/.config/sql-splitter/history.json`
    pub file:        Option<PathBuf>,
    /// Number of statements kept before the oldest are evicted
    pub max_entries: usize
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            file:        None,
            max_entries: DEFAULT_MAX_ENTRIES
        }
    }
}

impl HistoryConfig {
    /// Configured history file or the default location
    pub fn path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(default_history_path)
    }
}

impl Config {
    /// Load configuration from file and environment
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file in current directory (.sql-splitter.toml)
    /// 3. Config file in home directory (~/.config/sql-splitter/config.toml)
    /// 4. Default values
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(dir) = config_dir() {
            let home_config = dir.join("config.toml");
            if home_config.exists() {
                config = Self::from_file(&home_config)?;
            }
        }

        let local_config = PathBuf::from(".sql-splitter.toml");
        if local_config.exists() {
            config = Self::from_file(&local_config)?;
        }

        config.apply_overrides(|name| env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> AppResult<Self> {
        toml::from_str(content).map_err(|e| config_error(format!("Invalid config file: {}", e)))
    }

    fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| config_error(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Apply environment-style overrides looked up through `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> AppResult<()>
    where
        F: Fn(&str) -> Option<String>
    {
        if let Some(file) = lookup(HISTORY_FILE_ENV) {
            self.history.file = Some(PathBuf::from(file));
        }

        if let Some(max) = lookup(MAX_HISTORY_ENV) {
            self.history.max_entries = max.trim().parse().map_err(|_| {
                config_error(format!(
                    "{} must be a positive integer, got '{}'",
                    MAX_HISTORY_ENV, max
                ))
            })?;
        }

        Ok(())
    }

    /// Reject values the history cannot work with
    pub fn validate(&self) -> AppResult<()> {
        if self.history.max_entries == 0 {
            return Err(config_error("history.max_entries must be at least 1"));
        }
        Ok(())
    }
}

fn config_dir() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join("sql-splitter")
    })
}

fn default_history_path() -> PathBuf {
    config_dir()
        .map(|dir| dir.join("history.json"))
        .unwrap_or_else(|| PathBuf::from(".sql-splitter-history.json"))
}
