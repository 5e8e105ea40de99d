use std::fmt;

use serde::Serialize;

/// Phase of the splitter that produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitStrategy {
    /// Statements were terminated by `;`
    Separator,
    /// Statements were anchored on line-leading keywords
    Keyword
}

impl fmt::Display for SplitStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Separator => write!(f, "separator"),
            Self::Keyword => write!(f, "keyword")
        }
    }
}

/// Statements produced by a single split call, in source order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitOutcome {
    pub statements: Vec<String>,
    pub strategy:   SplitStrategy
}
