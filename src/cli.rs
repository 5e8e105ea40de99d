use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// SQL Splitter - Split SQL text into statements and keep a statement history
#[derive(Parser, Debug)]
#[command(name = "sql-splitter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the history file (overrides configuration)
    #[arg(long, global = true)]
    pub history_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split SQL text into individual statements
    Split {
        /// SQL files to split (use - for stdin)
        #[arg(default_value = "-")]
        inputs: Vec<PathBuf>,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        output_format: Format,

        /// Show split strategy and statement keywords
        #[arg(short, long)]
        verbose: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool
    },

    /// Split a submitted SQL text and append its statements to history
    Record {
        /// SQL file that was submitted (use - for stdin)
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Number of statements kept in history
        #[arg(short, long)]
        max_entries: Option<usize>
    },

    /// Inspect or clear the statement history
    History {
        #[command(subcommand)]
        action: HistoryAction
    }
}

#[derive(Subcommand, Debug)]
pub enum HistoryAction {
    /// Print stored statements, oldest first
    List {
        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        output_format: Format,

        /// Disable colored output
        #[arg(long)]
        no_color: bool
    },

    /// Delete all stored statements
    Clear
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Yaml
}
