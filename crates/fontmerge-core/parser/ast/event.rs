//! `[Events]` records
//!
//! Every kind except `Comment` feeds font collection. Comments are kept so
//! event numbering and diagnostics stay faithful to the file.

use core::fmt;

/// Kind of an `[Events]` record, named by its line key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// `Dialogue:` rendered subtitle line
    Dialogue,
    /// `Comment:` line kept by editors but never rendered
    Comment,
    /// `Picture:` legacy SSA record
    Picture,
    /// `Sound:` legacy SSA record
    Sound,
    /// `Movie:` legacy SSA record
    Movie,
    /// `Command:` legacy SSA record
    Command,
}

/// Known record kinds with their line keys
const EVENT_KEYS: [(&str, EventType); 6] = [
    ("Dialogue", EventType::Dialogue),
    ("Comment", EventType::Comment),
    ("Picture", EventType::Picture),
    ("Sound", EventType::Sound),
    ("Movie", EventType::Movie),
    ("Command", EventType::Command),
];

impl EventType {
    /// Record kind for a line key such as `Dialogue`; keys are case-sensitive
    ///
    /// ```rust
    /// use fontmerge_core::parser::ast::EventType;
    ///
    /// assert_eq!(EventType::from_key(" Comment"), Some(EventType::Comment));
    /// assert_eq!(EventType::from_key("Karaoke"), None);
    /// ```
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        EVENT_KEYS
            .iter()
            .find_map(|&(name, kind)| (name == key).then_some(kind))
    }

    /// Line key of this kind
    #[must_use]
    pub fn key(self) -> &'static str {
        EVENT_KEYS
            .iter()
            .find_map(|&(name, kind)| (kind == self).then_some(name))
            .unwrap_or("Dialogue")
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One `[Events]` record, borrowing every column from the source
///
/// ```rust
/// use fontmerge_core::parser::ast::{Event, EventType};
///
/// let line = Event { style: "Sign", text: r"{\fnImpact}EXIT", ..Event::default() };
/// assert!(line.is_dialogue());
///
/// let note = Event { event_type: EventType::Comment, ..line };
/// assert!(!note.is_dialogue());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event<'a> {
    /// Record kind
    pub event_type: EventType,
    /// `Layer` column
    pub layer: &'a str,
    /// `Start` timestamp as written
    pub start: &'a str,
    /// `End` timestamp as written
    pub end: &'a str,
    /// Style the line starts from
    pub style: &'a str,
    /// Actor column
    pub name: &'a str,
    /// `Effect` column
    pub effect: &'a str,
    /// Raw text, override blocks included
    pub text: &'a str,
    /// 1-based source line, 0 for hand-built records
    pub line: usize,
}

impl Event<'_> {
    /// Whether the record is rendered
    #[must_use]
    pub const fn is_dialogue(&self) -> bool {
        matches!(self.event_type, EventType::Dialogue)
    }

    #[must_use]
    pub const fn is_comment(&self) -> bool {
        matches!(self.event_type, EventType::Comment)
    }
}

impl Default for Event<'_> {
    /// Empty dialogue line on the `Default` style
    fn default() -> Self {
        Self {
            event_type: EventType::Dialogue,
            layer: "0",
            start: "0:00:00.00",
            end: "0:00:00.00",
            style: "Default",
            name: "",
            effect: "",
            text: "",
            line: 0,
        }
    }
}
