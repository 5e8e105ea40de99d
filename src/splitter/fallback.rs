//! Keyword-anchored line splitting.
//!
//! Used for text that holds several statements without any `;`, one or more
//! lines per statement. A line that starts with a statement keyword begins a
//! new statement; every other line continues the current one. Nested blocks
//! and multi-keyword constructs are not recognised.

use std::sync::LazyLock;

use regex::Regex;

/// Keywords that start a new statement in the fallback split.
pub const STATEMENT_KEYWORDS: [&str; 12] = [
    "CREATE", "ALTER", "DROP", "INSERT", "UPDATE", "DELETE", "SELECT", "GRANT", "REVOKE", "COMMIT",
    "ROLLBACK", "BEGIN"
];

/// Keyword followed by whitespace, or the keyword alone.
static KEYWORD_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^({})(?:\s|$)",
        STATEMENT_KEYWORDS.join("|")
    ))
    .expect("valid regex")
});

/// Return the statement keyword `text` starts with, ignoring leading
/// whitespace and case.
///
/// # Example
///
/// ```
/// use sql_splitter::splitter::leading_keyword;
///
/// assert_eq!(leading_keyword("  select * from t"), Some("SELECT"));
/// assert_eq!(leading_keyword("SELECTED"), None);
/// assert_eq!(leading_keyword("-- comment\nSELECT 1"), None);
/// ```
pub fn leading_keyword(text: &str) -> Option<&'static str> {
    let captures = KEYWORD_LINE_REGEX.captures(text.trim_start())?;
    let matched = captures.get(1)?.as_str();
    STATEMENT_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| keyword.eq_ignore_ascii_case(matched))
}

fn starts_with_keyword(line: &str) -> bool {
    KEYWORD_LINE_REGEX.is_match(line.trim())
}

/// Re-split `source` line by line on keyword-led lines.
pub(super) fn split_by_keywords(source: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut pending = String::new();

    for line in source.split('\n') {
        if starts_with_keyword(line) && !pending.trim().is_empty() {
            statements.push(pending.trim().to_string());
            pending.clear();
            pending.push_str(line);
        } else {
            if !pending.is_empty() {
                pending.push('\n');
            }
            pending.push_str(line);
        }
    }

    let last = pending.trim();
    if !last.is_empty() {
        statements.push(last.to_string());
    }

    statements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_keyword_starts_statement() {
        for keyword in STATEMENT_KEYWORDS {
            assert!(starts_with_keyword(&format!("{} something", keyword)));
            assert!(starts_with_keyword(keyword));
        }
    }

    #[test]
    fn test_keyword_case_insensitive() {
        assert!(starts_with_keyword("create table t (id int)"));
        assert!(starts_with_keyword("  Insert INTO t VALUES (1)"));
    }

    #[test]
    fn test_keyword_followed_by_tab() {
        assert!(starts_with_keyword("SELECT\t1"));
    }

    #[test]
    fn test_keyword_prefix_of_identifier_is_not_keyword() {
        assert!(!starts_with_keyword("CREATED_AT INT"));
        assert!(!starts_with_keyword("BEGINNING"));
        assert!(!starts_with_keyword("SELECT*"));
    }

    #[test]
    fn test_non_keyword_line() {
        assert!(!starts_with_keyword("FROM users"));
        assert!(!starts_with_keyword(""));
    }

    #[test]
    fn test_leading_keyword_normalizes_case() {
        assert_eq!(leading_keyword("rollback"), Some("ROLLBACK"));
        assert_eq!(leading_keyword("Grant ALL ON t TO u;"), Some("GRANT"));
        assert_eq!(leading_keyword("WITH x AS (SELECT 1) SELECT * FROM x"), None);
    }

    #[test]
    fn test_split_groups_continuation_lines() {
        let source = "SELECT id\nFROM users\nWHERE id = 1\nUPDATE users\nSET name = 'x'";
        assert_eq!(split_by_keywords(source), vec![
            "SELECT id\nFROM users\nWHERE id = 1",
            "UPDATE users\nSET name = 'x'"
        ]);
    }

    #[test]
    fn test_split_keeps_leading_non_keyword_lines() {
        let source = "-- setup\nCREATE TABLE a (x INT)\nCREATE TABLE b (y INT)";
        assert_eq!(split_by_keywords(source), vec![
            "-- setup",
            "CREATE TABLE a (x INT)",
            "CREATE TABLE b (y INT)"
        ]);
    }

    #[test]
    fn test_split_without_keyword_lines_returns_whole_input() {
        let source = "foo\nbar\nbaz";
        assert_eq!(split_by_keywords(source), vec!["foo\nbar\nbaz"]);
    }

    #[test]
    fn test_split_skips_blank_lines_between_statements() {
        let source = "BEGIN\n\n\nCOMMIT\n";
        assert_eq!(split_by_keywords(source), vec!["BEGIN", "COMMIT"]);
    }

    #[test]
    fn test_split_handles_carriage_returns() {
        let source = "SELECT 1\r\nSELECT 2\r\n";
        assert_eq!(split_by_keywords(source), vec!["SELECT 1", "SELECT 2"]);
    }

    #[test]
    fn test_split_empty_source() {
        assert!(split_by_keywords("").is_empty());
    }
}
