//! Primary parse error type for ASS script parsing
//!
//! Contains the `ParseError` enum representing problems that prevent a script
//! from being used at all. Everything else is reported as a `ParseIssue` and
//! parsing continues.

use thiserror::Error;

/// Unrecoverable parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Section header not properly closed (e.g. `[Events`)
    #[error("section header on line {line} is missing its closing bracket")]
    UnclosedSectionHeader {
        /// Line number (1-based)
        line: usize,
    },

    /// Format line lacks a field the parser cannot do without
    #[error("format line on line {line} of [{section}] has no `{field}` field")]
    MissingFormatField {
        /// Required field name
        field: &'static str,
        /// Section the format line belongs to
        section: String,
        /// Line number (1-based)
        line: usize,
    },
}
