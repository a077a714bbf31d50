//! `[Script Info]` field parsing

use crate::parser::errors::{IssueCategory, ParseIssue};

/// Split a `key: value` line into trimmed parts
///
/// # Errors
///
/// Returns an info-level [`ParseIssue`] for lines without a colon; such lines
/// carry no information and are skipped.
pub fn parse_info_field(line: &str, line_number: usize) -> Result<(&str, &str), ParseIssue> {
    line.split_once(':')
        .map(|(key, value)| (key.trim(), value.trim()))
        .ok_or_else(|| {
            ParseIssue::info(
                IssueCategory::Format,
                format!("script info line without `key: value` form: {line}"),
                line_number,
            )
        })
}
