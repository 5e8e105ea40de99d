//! Application types for CLI commands.
//!
//! Parameters passed from the parsed command line to each command, and the
//! output every command hands back to `main`.

use std::path::PathBuf;

use crate::cli::Format;

/// Parameters for the split command.
///
/// # Example
///
/// ```
/// use sql_splitter::{app::SplitParams, cli::Format};
///
/// let params = SplitParams {
///     inputs:        vec!["queries.sql".to_string()],
///     output_format: Format::Text,
///     verbose:       false,
///     no_color:      true
/// };
/// ```
#[derive(Debug, Clone)]
pub struct SplitParams {
    /// Paths of SQL files, "-" reads stdin.
    pub inputs:        Vec<String>,
    /// Output format for results.
    pub output_format: Format,
    /// Show the split strategy and statement keywords.
    pub verbose:       bool,
    /// Disable colored terminal output.
    pub no_color:      bool
}

/// Parameters for the record command.
#[derive(Debug, Clone)]
pub struct RecordParams {
    /// Path of the submitted SQL, "-" reads stdin.
    pub input:        String,
    /// History file to update.
    pub history_path: PathBuf,
    /// Number of statements kept in history.
    pub max_entries:  usize
}

/// Parameters for listing history.
#[derive(Debug, Clone)]
pub struct HistoryListParams {
    pub history_path:  PathBuf,
    pub max_entries:   usize,
    pub output_format: Format,
    pub no_color:      bool
}

/// Output from CLI command execution.
///
/// # Example
///
/// ```
/// use sql_splitter::app::CommandOutput;
///
/// let output = CommandOutput {
///     exit_code: 0,
///     stdout:    vec!["Recorded 2 statements.".to_string()]
/// };
/// ```
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code for the process.
    pub exit_code: i32,
    /// Lines to print to stdout.
    pub stdout:    Vec<String>
}

impl CommandOutput {
    /// Successful output consisting of a single block of text
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            exit_code: 0,
            stdout:    vec![text.into()]
        }
    }
}
