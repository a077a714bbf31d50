//! Style line parsing for the styles sections
//!
//! Maps the comma-separated values of a `Style:` line onto the columns of
//! the section's `Format:` line.

use super::FieldFormat;
use crate::parser::{
    ast::Style,
    errors::{IssueCategory, ParseError, ParseIssue},
};

/// Fields a style format cannot do without
const REQUIRED_STYLE_FIELDS: [&str; 2] = ["Name", "Fontname"];

/// Check a style `Format:` line declares the fields font lookup needs
///
/// # Errors
///
/// Returns [`ParseError::MissingFormatField`] naming the first missing field.
pub fn validate_style_format(format: &FieldFormat<'_>, line: usize) -> Result<(), ParseError> {
    match REQUIRED_STYLE_FIELDS
        .into_iter()
        .find(|field| format.index_of(field).is_none())
    {
        Some(field) => Err(ParseError::MissingFormatField {
            field,
            section: "V4+ Styles".to_string(),
            line,
        }),
        None => Ok(()),
    }
}

/// Parse the value of a `Style:` line
///
/// Extra trailing values are ignored. Fields absent from the format read as
/// empty strings.
///
/// # Errors
///
/// Returns an error-level [`ParseIssue`] when the line has fewer values than
/// the format declares; the style is dropped.
///
/// # Example
///
/// ```rust
/// use fontmerge_core::parser::sections::{styles::parse_style_line, FieldFormat};
///
/// let format = FieldFormat::parse("Name, Fontname, Fontsize, Bold");
/// let style = parse_style_line("Sign, Verdana, 40, -1", &format, 3).unwrap();
/// assert_eq!(style.fontname, "Verdana");
/// assert!(style.is_bold());
/// ```
pub fn parse_style_line<'a>(
    value: &'a str,
    format: &FieldFormat<'a>,
    line: usize,
) -> Result<Style<'a>, ParseIssue> {
    let parts: Vec<&'a str> = value.split(',').map(str::trim).collect();
    if parts.len() < format.len() {
        return Err(ParseIssue::error(
            IssueCategory::Style,
            format!(
                "style line has {} fields, expected {}; style skipped",
                parts.len(),
                format.len()
            ),
            line,
        ));
    }

    let field = |name: &str| format.index_of(name).map_or("", |index| parts[index]);

    Ok(Style {
        name: field("Name"),
        fontname: field("Fontname"),
        fontsize: field("Fontsize"),
        bold: field("Bold"),
        italic: field("Italic"),
        underline: field("Underline"),
        strikeout: field("StrikeOut"),
        encoding: field("Encoding"),
        line,
    })
}
