//! Section-level parsing helpers for ASS scripts
//!
//! Section headers are classified into the few kinds the font engine cares
//! about. Styles and events are comma-separated records whose column order is
//! declared by a `Format:` line, mapped here by [`FieldFormat`].

pub mod events;
pub mod script_info;
pub mod styles;

/// Standard V4+ style field order, used when a section has no `Format:` line
pub const DEFAULT_STYLE_FORMAT: &[&str] = &[
    "Name",
    "Fontname",
    "Fontsize",
    "PrimaryColour",
    "SecondaryColour",
    "OutlineColour",
    "BackColour",
    "Bold",
    "Italic",
    "Underline",
    "StrikeOut",
    "ScaleX",
    "ScaleY",
    "Spacing",
    "Angle",
    "BorderStyle",
    "Outline",
    "Shadow",
    "Alignment",
    "MarginL",
    "MarginR",
    "MarginV",
    "Encoding",
];

/// Standard V4+ event field order, used when a section has no `Format:` line
pub const DEFAULT_EVENT_FORMAT: &[&str] = &[
    "Layer", "Start", "End", "Style", "Name", "MarginL", "MarginR", "MarginV", "Effect", "Text",
];

/// Section kinds recognized by the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// `[Script Info]`
    ScriptInfo,
    /// `[V4 Styles]`, `[V4+ Styles]` or `[V4++ Styles]`
    Styles,
    /// `[Events]`
    Events,
    /// Anything else (`[Fonts]`, `[Graphics]`, `[Aegisub Project Garbage]`, ...)
    Other,
}

impl SectionKind {
    /// Classify a section header name (without brackets), case-insensitively
    ///
    /// # Example
    ///
    /// ```rust
    /// use fontmerge_core::parser::sections::SectionKind;
    ///
    /// assert_eq!(SectionKind::from_header("V4+ Styles"), SectionKind::Styles);
    /// assert_eq!(SectionKind::from_header("events"), SectionKind::Events);
    /// assert_eq!(SectionKind::from_header("Fonts"), SectionKind::Other);
    /// ```
    #[must_use]
    pub fn from_header(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "script info" => Self::ScriptInfo,
            "v4 styles" | "v4+ styles" | "v4++ styles" => Self::Styles,
            "events" => Self::Events,
            _ => Self::Other,
        }
    }
}

/// Column layout declared by a `Format:` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFormat<'a> {
    /// Trimmed field names in column order
    fields: Vec<&'a str>,
}

impl<'a> FieldFormat<'a> {
    /// Parse the value of a `Format:` line
    #[must_use]
    pub fn parse(value: &'a str) -> Self {
        Self {
            fields: value.split(',').map(str::trim).collect(),
        }
    }

    /// Standard style layout
    #[must_use]
    pub fn default_styles() -> Self {
        Self {
            fields: DEFAULT_STYLE_FORMAT.to_vec(),
        }
    }

    /// Standard event layout
    #[must_use]
    pub fn default_events() -> Self {
        Self {
            fields: DEFAULT_EVENT_FORMAT.to_vec(),
        }
    }

    /// Column index of a field, compared case-insensitively
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields
            .iter()
            .position(|field| field.eq_ignore_ascii_case(name))
    }

    /// Number of declared columns
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the format declares no columns
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
