//! Application logic for the SQL Splitter CLI.
//!
//! This module contains the command implementations separated from the main
//! entry point to enable testing. Every command returns a [`CommandOutput`]
//! that `main` prints.

mod convert;
mod helpers;
mod history;
mod split;
mod types;

pub use convert::convert_format;
pub use helpers::{create_output_options, read_input, resolve_history_path, resolve_max_entries};
pub use history::{run_history_clear, run_history_list, run_record};
pub use split::run_split;
pub use types::{CommandOutput, HistoryListParams, RecordParams, SplitParams};
