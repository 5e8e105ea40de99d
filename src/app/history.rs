//! History commands.
//!
//! `record` mirrors what happens after a successful submission: the text is
//! split and every statement is appended to the stored history. The text
//! itself is never modified.

use std::path::PathBuf;

use super::{
    helpers::{create_output_options, read_input},
    types::{CommandOutput, HistoryListParams, RecordParams}
};
use crate::{
    error::AppResult,
    history::{DEFAULT_MAX_ENTRIES, HistoryStore},
    output::format_history
};

/// Splits the submitted text and appends its statements to history.
///
/// # Errors
///
/// Returns an error if the input cannot be read or the history file cannot
/// be loaded or written.
pub fn run_record(params: RecordParams) -> AppResult<CommandOutput> {
    let text = read_input(&params.input)?;
    let store = HistoryStore::new(params.history_path, params.max_entries);
    let mut history = store.load()?;
    let recorded = history.record_submission(&text);
    store.save(&history)?;

    Ok(CommandOutput::success(format!(
        "Recorded {} statement{} ({} in history).",
        recorded,
        if recorded == 1 { "" } else { "s" },
        history.len()
    )))
}

/// Prints the stored history, oldest first.
pub fn run_history_list(params: HistoryListParams) -> AppResult<CommandOutput> {
    let store = HistoryStore::new(params.history_path, params.max_entries);
    let history = store.load()?;
    let opts = create_output_options(params.output_format, params.no_color, false);
    Ok(CommandOutput::success(format_history(history.entries(), &opts)))
}

/// Deletes the stored history.
pub fn run_history_clear(history_path: PathBuf) -> AppResult<CommandOutput> {
    let store = HistoryStore::new(history_path, DEFAULT_MAX_ENTRIES);
    store.clear()?;
    tracing::debug!(path = %store.path().display(), "Cleared history");
    Ok(CommandOutput::success("History cleared."))
}
