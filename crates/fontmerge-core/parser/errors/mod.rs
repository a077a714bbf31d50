//! Parser error types for ASS script parsing
//!
//! # Error Philosophy
//!
//! - Prefer recovery over failure where possible
//! - Provide line numbers for user-facing messages
//!
//! # Module Organization
//!
//! - `parse_error` - Unrecoverable structural errors
//! - `parse_issue` - Recoverable issues and warnings

pub mod parse_error;
pub mod parse_issue;

pub use parse_error::ParseError;
pub use parse_issue::{IssueCategory, IssueSeverity, ParseIssue};
