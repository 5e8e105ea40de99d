//! Statement history.
//!
//! Keeps the statements of successful submissions in the order they were
//! last seen. Each statement appears once: recording a statement that is
//! already present moves it to the end. The history is capped and evicts its
//! oldest entries first.
//!
//! [`HistoryStore`] persists a history as a pretty-printed JSON array of
//! strings, oldest first.
//!
//! # Example
//!
//! ```
//! use sql_splitter::history::History;
//!
//! let mut history = History::new(2);
//! history.record_submission("SELECT 1; SELECT 2;");
//! history.record_submission("SELECT 1; SELECT 3;");
//!
//! let entries: Vec<&str> = history.entries().collect();
//! assert_eq!(entries, vec!["SELECT 1;", "SELECT 3;"]);
//! ```

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf}
};

use indexmap::IndexSet;

use crate::{
    error::{AppResult, file_read_error, file_write_error, history_format_error, serialize_error},
    splitter::split_statements
};

/// Default number of statements kept in history
pub const DEFAULT_MAX_ENTRIES: usize = 100;

/// Ordered, de-duplicated, capped list of prior statements
#[derive(Debug, Clone)]
pub struct History {
    entries:     IndexSet<String>,
    max_entries: usize
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES)
    }
}

impl History {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: IndexSet::new(),
            max_entries
        }
    }

    /// Build a history from stored entries, oldest first.
    ///
    /// Duplicates keep their last position and the cap is applied.
    pub fn from_entries<I, S>(entries: I, max_entries: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        let mut history = Self::new(max_entries);
        history.record(entries);
        history
    }

    /// Append statements, moving any already present to the end.
    ///
    /// Whitespace-only statements are skipped. Returns the number of
    /// statements recorded.
    pub fn record<I, S>(&mut self, statements: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        let mut recorded = 0;
        for statement in statements {
            let statement = statement.into();
            if statement.trim().is_empty() {
                continue;
            }
            self.entries.shift_remove(statement.as_str());
            self.entries.insert(statement);
            recorded += 1;
        }
        self.evict_oldest();
        recorded
    }

    /// Split a submitted text and record its statements.
    pub fn record_submission(&mut self, text: &str) -> usize {
        self.record(split_statements(text))
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn contains(&self, statement: &str) -> bool {
        self.entries.contains(statement)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn evict_oldest(&mut self) {
        if self.entries.len() > self.max_entries {
            let excess = self.entries.len() - self.max_entries;
            self.entries.drain(..excess);
            tracing::debug!(evicted = excess, "Evicted oldest history entries");
        }
    }
}

/// JSON file holding a [`History`]
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path:        PathBuf,
    max_entries: usize
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>, max_entries: usize) -> Self {
        Self {
            path: path.into(),
            max_entries
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored history.
    ///
    /// A missing or empty file yields an empty history.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a JSON array of
    /// strings.
    pub fn load(&self) -> AppResult<History> {
        let shown = self.path.display().to_string();
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %shown, "No history file, starting empty");
                return Ok(History::new(self.max_entries));
            }
            Err(e) => return Err(file_read_error(&shown, e))
        };

        if content.trim().is_empty() {
            return Ok(History::new(self.max_entries));
        }

        let entries: Vec<String> = serde_json::from_str(&content)
            .map_err(|e| history_format_error(&shown, e.to_string()))?;
        tracing::debug!(path = %shown, entries = entries.len(), "Loaded history");
        Ok(History::from_entries(entries, self.max_entries))
    }

    /// Write `history` to the store, creating parent directories.
    pub fn save(&self, history: &History) -> AppResult<()> {
        let shown = self.path.display().to_string();
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| file_write_error(&shown, e))?;
        }

        let entries: Vec<&str> = history.entries().collect();
        let json =
            serde_json::to_string_pretty(&entries).map_err(|e| serialize_error(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| file_write_error(&shown, e))?;
        tracing::debug!(path = %shown, entries = entries.len(), "Saved history");
        Ok(())
    }

    /// Delete the stored history. A missing file is not an error.
    pub fn clear(&self) -> AppResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(file_write_error(&self.path.display().to_string(), e))
        }
    }
}
