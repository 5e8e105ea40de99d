//! # SQL Splitter
//!
//! Split SQL text into individual statements and keep a history of what was
//! submitted.
//!
//! `sql-splitter` segments a block of SQL into statements the way a query
//! console does for its history panel: on `;` separators, ignoring any that
//! appear inside string literals or `--` comments. Text without separators
//! that spans several lines is split on lines starting with a statement
//! keyword (`CREATE`, `SELECT`, `INSERT`, ...). The splitter does not
//! validate SQL.
//!
//! # Quick Start
//!
//! ```bash
//! # Split a file
//! sql-splitter split migrations.sql
//!
//! # Split stdin, show strategy and statement keywords
//! echo "SELECT 1; SELECT 2;" | sql-splitter split -v
//!
//! # Machine-readable output
//! sql-splitter split a.sql b.sql -f json
//!
//! # Record a submitted script in history, then list it
//! sql-splitter record script.sql
//! sql-splitter history list
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded from (in order of precedence):
//!
//! 1. Command-line arguments (`--history-file`, `--max-entries`)
//! 2. Environment variables (`SQL_SPLITTER_HISTORY`,
//!    `SQL_SPLITTER_MAX_HISTORY`)
//! 3. `.sql-splitter.toml` in current directory
//! 4. `~/.config/sql-splitter/config.toml`
//!
//! ```toml
//! [history]
//! file = "/home/me/.config/sql-splitter/history.json"
//! max_entries = 100
//! ```
//!
//! # Logging
//!
//! Diagnostics go to stderr through `tracing`. The level defaults to `warn`
//! and follows `RUST_LOG`, e.g. `RUST_LOG=debug sql-splitter split q.sql`.
//!
//! # Exit Codes
//!
//! - `0` - Success
//! - `1` - Unreadable input, invalid configuration or history file
//!
//! # Output Formats
//!
//! - `text` - Human-readable colored output (default)
//! - `json` - Structured JSON for programmatic processing
//! - `yaml` - YAML format

use std::process;

use clap::Parser;
use sql_splitter::{
    app::{
        CommandOutput, HistoryListParams, RecordParams, SplitParams, resolve_history_path,
        resolve_max_entries, run_history_clear, run_history_list, run_record, run_split
    },
    cli::{Cli, Commands, HistoryAction},
    config::Config,
    error::AppResult
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run() -> AppResult<i32> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let history_path = resolve_history_path(cli.history_file, &config);

    let output: CommandOutput = match cli.command {
        Commands::Split {
            inputs,
            output_format,
            verbose,
            no_color
        } => run_split(SplitParams {
            inputs: inputs
                .iter()
                .map(|p| p.to_string_lossy().into_owned())
                .collect(),
            output_format,
            verbose,
            no_color
        })?,
        Commands::Record {
            input,
            max_entries
        } => run_record(RecordParams {
            input: input.to_string_lossy().into_owned(),
            history_path,
            max_entries: resolve_max_entries(max_entries, &config)?
        })?,
        Commands::History {
            action
        } => match action {
            HistoryAction::List {
                output_format,
                no_color
            } => run_history_list(HistoryListParams {
                history_path,
                max_entries: config.history.max_entries,
                output_format,
                no_color
            })?,
            HistoryAction::Clear => run_history_clear(history_path)?
        }
    };

    for line in &output.stdout {
        println!("{}", line);
    }

    Ok(output.exit_code)
}
