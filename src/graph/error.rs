use std::num::ParseIntError;
use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error raised while reading an edge list.
/// Every variant carries the 1-based line number and the raw text of the
/// offending line so the diagnostic can point straight at it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line does not split into exactly `source dest cost`.
    #[error("line {line}: expected 3 fields `source dest cost`, found {found}: '{content}'")]
    FieldCount {
        line: usize,
        found: usize,
        content: String,
    },

    /// One of the three fields is not an integer.
    #[error("line {line}: invalid integer '{token}' ({source}): '{content}'")]
    InvalidInteger {
        line: usize,
        token: String,
        content: String,
        source: ParseIntError,
    },
}

impl ParseError {
    /// Line number (1-based) of the rejected line.
    pub fn line(&self) -> usize {
        match self {
            ParseError::FieldCount { line, .. } | ParseError::InvalidInteger { line, .. } => *line,
        }
    }
}
