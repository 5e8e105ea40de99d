//! Helper functions for CLI operations.
//!
//! Reading input, building output options, and merging command-line flags
//! with the loaded configuration.

use std::{
    fs::read_to_string,
    io::{self, Read},
    path::PathBuf
};

use super::convert::convert_format;
use crate::{
    cli::Format,
    config::Config,
    error::{AppResult, config_error, file_read_error},
    output::OutputOptions
};

/// Reads SQL text from a file or stdin.
///
/// Reads standard input when the path is "-".
///
/// # Errors
///
/// Returns an error if the file cannot be read or stdin fails.
pub fn read_input(path: &str) -> AppResult<String> {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| file_read_error("stdin", e))?;
        Ok(buffer)
    } else {
        read_to_string(path).map_err(|e| file_read_error(path, e))
    }
}

/// Creates output options from CLI flags.
pub fn create_output_options(format: Format, no_color: bool, verbose: bool) -> OutputOptions {
    OutputOptions {
        format: convert_format(format),
        colored: !no_color,
        verbose
    }
}

/// Picks the history file: the command-line flag wins over configuration.
pub fn resolve_history_path(flag: Option<PathBuf>, config: &Config) -> PathBuf {
    flag.unwrap_or_else(|| config.history.path())
}

/// Picks the history cap: the command-line flag wins over configuration.
///
/// # Errors
///
/// Returns an error if the effective cap is zero.
pub fn resolve_max_entries(flag: Option<usize>, config: &Config) -> AppResult<usize> {
    match flag.unwrap_or(config.history.max_entries) {
        0 => Err(config_error("--max-entries must be at least 1")),
        max => Ok(max)
    }
}
