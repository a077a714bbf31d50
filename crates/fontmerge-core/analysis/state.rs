//! Formatting state and the per-document style table
//!
//! A [`FormattingState`] is the font-relevant slice of rendering attributes in
//! effect at one point of a dialogue line. Each line starts from the default
//! state of its style, which the [`StyleTable`] provides.

use crate::{
    parser::Style,
    utils::{create_hash_map, hashers::AHashMap},
};

/// Font used when a line references a style that does not exist
pub const FALLBACK_FONT: &str = "Arial";

/// Weight of regular text
pub const REGULAR_WEIGHT: u16 = 400;

/// Weight of bold text
pub const BOLD_WEIGHT: u16 = 700;

/// Rendering attributes in effect for a run of text
///
/// Immutable value: override tags produce a new state rather than mutating
/// the current one. Fonts borrow from the script source.
///
/// # Example
///
/// ```rust
/// use fontmerge_core::analysis::FormattingState;
/// use fontmerge_core::parser::Style;
///
/// let style = Style { name: "Sign", fontname: "Verdana", bold: "-1", ..Style::default() };
/// let state = FormattingState::from_style(&style);
/// assert_eq!(state.font, "Verdana");
/// assert_eq!(state.weight, 700);
/// assert!(!state.drawing);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FormattingState<'a> {
    /// Font name as written in the script
    pub font: &'a str,
    /// Italic flag
    pub italic: bool,
    /// Font weight, 100-900 nominal
    pub weight: u16,
    /// Whether `\p` drawing mode is active
    pub drawing: bool,
}

impl<'a> FormattingState<'a> {
    /// State used for lines whose style is unknown: Arial, regular, upright
    #[must_use]
    pub const fn fallback() -> Self {
        Self {
            font: FALLBACK_FONT,
            italic: false,
            weight: REGULAR_WEIGHT,
            drawing: false,
        }
    }

    /// Default state of a style; bold maps to weight 700, otherwise 400
    #[must_use]
    pub fn from_style(style: &Style<'a>) -> Self {
        Self {
            font: style.fontname,
            italic: style.is_italic(),
            weight: if style.is_bold() {
                BOLD_WEIGHT
            } else {
                REGULAR_WEIGHT
            },
            drawing: false,
        }
    }
}

impl Default for FormattingState<'_> {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Style name to default state mapping, built once per document
///
/// Keeps declaration order for iteration. When a name is declared twice the
/// later declaration replaces the state but keeps the first position.
#[derive(Debug, Clone, Default)]
pub struct StyleTable<'a> {
    /// Entries in declaration order
    entries: Vec<(&'a str, FormattingState<'a>)>,
    /// Position of each name in `entries`
    index: AHashMap<&'a str, usize>,
}

impl<'a> StyleTable<'a> {
    /// Build the table from style definitions in declaration order
    #[must_use]
    pub fn from_styles(styles: &[Style<'a>]) -> Self {
        let mut table = Self {
            entries: Vec::with_capacity(styles.len()),
            index: create_hash_map(),
        };
        for style in styles {
            table.insert(style.name, FormattingState::from_style(style));
        }
        table
    }

    /// Insert or replace the default state of a style
    pub fn insert(&mut self, name: &'a str, state: FormattingState<'a>) {
        if let Some(&position) = self.index.get(name) {
            self.entries[position].1 = state;
        } else {
            self.index.insert(name, self.entries.len());
            self.entries.push((name, state));
        }
    }

    /// Default state of a style, looked up by exact name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<FormattingState<'a>> {
        self.index.get(name).map(|&position| self.entries[position].1)
    }

    /// Styles and their default states in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, FormattingState<'a>)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of distinct style names
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no style is declared
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
