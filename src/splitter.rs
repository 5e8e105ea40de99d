//! SQL statement splitting.
//!
//! Divides a block of SQL text into individual statements for display and
//! history bookkeeping. The splitter does not validate syntax and its output
//! is never what gets executed: callers send the original text verbatim and
//! use the split result only to label and de-duplicate what was sent.
//!
//! # Phases
//!
//! 1. **Separator scan** (always runs) - a single left-to-right pass that
//!    splits on `;`, keeping string literals and `--` line comments intact.
//! 2. **Keyword fallback** (conditional) - when the scan found at most one
//!    statement and the unterminated tail spans several lines, the text is
//!    re-split on lines that start with a statement keyword such as `CREATE`
//!    or `SELECT`.
//!
//! Only one phase contributes to any given result.
//!
//! # Example
//!
//! ```
//! use sql_splitter::splitter::{SplitStrategy, split, split_statements};
//!
//! let statements = split_statements("SELECT 'a;b'; -- done;\nSELECT 2;");
//! assert_eq!(statements, vec!["SELECT 'a;b';", "-- done;\nSELECT 2;"]);
//!
//! let outcome = split("CREATE TABLE a (x INT)\nCREATE TABLE b (y INT)");
//! assert_eq!(outcome.strategy, SplitStrategy::Keyword);
//! assert_eq!(outcome.statements.len(), 2);
//! ```

mod fallback;
mod scanner;
mod types;

pub use fallback::{STATEMENT_KEYWORDS, leading_keyword};
use scanner::Scanner;
pub use types::{SplitOutcome, SplitStrategy};

/// Split SQL text into trimmed statements.
///
/// Total for every input: empty or whitespace-only text yields an empty
/// vector.
pub fn split_statements(source: &str) -> Vec<String> {
    split(source).statements
}

/// Split SQL text, reporting which phase produced the statements.
pub fn split(source: &str) -> SplitOutcome {
    let scan = Scanner::new(source).scan();

    if scan.statements.len() <= 1 && scan.remainder.trim().contains('\n') {
        let statements = fallback::split_by_keywords(source);
        tracing::debug!(
            statements = statements.len(),
            "No separators found in multi-line text, split on leading keywords"
        );
        return SplitOutcome {
            statements,
            strategy: SplitStrategy::Keyword
        };
    }

    tracing::debug!(statements = scan.statements.len(), "Split on separators");
    SplitOutcome {
        statements: scan.statements,
        strategy:   SplitStrategy::Separator
    }
}
