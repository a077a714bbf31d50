//! Event line parsing for the `[Events]` section
//!
//! Event values are split with `splitn` over the declared column count, so
//! commas inside the trailing `Text` column survive intact.

use super::FieldFormat;
use crate::parser::{
    ast::{Event, EventType},
    errors::{IssueCategory, ParseError, ParseIssue},
};

/// Fields an event format cannot do without
const REQUIRED_EVENT_FIELDS: [&str; 2] = ["Style", "Text"];

/// Check an event `Format:` line declares the fields font lookup needs
///
/// # Errors
///
/// Returns [`ParseError::MissingFormatField`] naming the first missing field.
pub fn validate_event_format(format: &FieldFormat<'_>, line: usize) -> Result<(), ParseError> {
    match REQUIRED_EVENT_FIELDS
        .into_iter()
        .find(|field| format.index_of(field).is_none())
    {
        Some(field) => Err(ParseError::MissingFormatField {
            field,
            section: "Events".to_string(),
            line,
        }),
        None => Ok(()),
    }
}

/// Parse the value part of an event line (after `Dialogue:`, `Comment:`, ...)
///
/// All columns except `Text` are trimmed. `Text` keeps its spacing because it
/// is visible subtitle content.
///
/// # Errors
///
/// Returns an error-level [`ParseIssue`] when the line has fewer values than
/// the format declares; the event is dropped.
///
/// # Example
///
/// ```rust
/// use fontmerge_core::parser::ast::EventType;
/// use fontmerge_core::parser::sections::{events::parse_event_line, FieldFormat};
///
/// let format = FieldFormat::default_events();
/// let event = parse_event_line(
///     EventType::Dialogue,
///     " 0,0:00:00.00,0:00:05.00,Default,,0,0,0,,Hello, world!",
///     &format,
///     10,
/// )
/// .unwrap();
/// assert_eq!(event.style, "Default");
/// assert_eq!(event.text, "Hello, world!");
/// ```
pub fn parse_event_line<'a>(
    event_type: EventType,
    value: &'a str,
    format: &FieldFormat<'a>,
    line: usize,
) -> Result<Event<'a>, ParseIssue> {
    let parts: Vec<&'a str> = value.trim_start().splitn(format.len(), ',').collect();
    if parts.len() < format.len() {
        return Err(ParseIssue::error(
            IssueCategory::Event,
            format!(
                "{} line has {} fields, expected {}; event skipped",
                event_type,
                parts.len(),
                format.len()
            ),
            line,
        ));
    }

    let raw = |name: &str| format.index_of(name).map_or("", |index| parts[index]);
    let field = |name: &str| raw(name).trim();

    Ok(Event {
        event_type,
        layer: field("Layer"),
        start: field("Start"),
        end: field("End"),
        style: field("Style"),
        name: field("Name"),
        effect: field("Effect"),
        text: raw("Text"),
        line,
    })
}
