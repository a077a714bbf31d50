//! Style AST node for ASS style definitions
//!
//! Contains the Style struct representing style definitions from the
//! [V4+ Styles] section with zero-copy design and typed flag accessors.

use crate::tokenizer::parse_leading_int;

/// Style definition from a styles section
///
/// Only the fields that matter for font selection are kept. All values are
/// zero-copy slices of the original source text, trimmed of surrounding
/// whitespace.
///
/// # Examples
///
/// ```rust
/// use fontmerge_core::parser::ast::Style;
///
/// let style = Style {
///     name: "Sign",
///     fontname: "Verdana",
///     bold: "-1",
///     ..Style::default()
/// };
///
/// assert!(style.is_bold());
/// assert!(!style.is_italic());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style<'a> {
    /// Style name (unique key referenced by events and `\r`)
    pub name: &'a str,

    /// Font family name for text rendering
    pub fontname: &'a str,

    /// Font size in points
    pub fontsize: &'a str,

    /// Bold flag (`-1`/`1` for bold, `0` for regular)
    pub bold: &'a str,

    /// Italic flag (`-1`/`1` for italic, `0` for upright)
    pub italic: &'a str,

    /// Underline flag
    pub underline: &'a str,

    /// Strikeout flag
    pub strikeout: &'a str,

    /// Font encoding identifier
    pub encoding: &'a str,

    /// Source line number (1-based) where the style is defined
    pub line: usize,
}

impl Style<'_> {
    /// Check if the style is bold
    ///
    /// Any nonzero leading integer counts as bold; `-1` is what most
    /// authoring tools write.
    #[must_use]
    pub fn is_bold(&self) -> bool {
        parse_leading_int(self.bold) != 0
    }

    /// Check if the style is italic
    #[must_use]
    pub fn is_italic(&self) -> bool {
        parse_leading_int(self.italic) != 0
    }
}

impl Default for Style<'_> {
    /// Create default ASS style with standard values
    fn default() -> Self {
        Self {
            name: "Default",
            fontname: "Arial",
            fontsize: "20",
            bold: "0",
            italic: "0",
            underline: "0",
            strikeout: "0",
            encoding: "1",
            line: 0,
        }
    }
}
