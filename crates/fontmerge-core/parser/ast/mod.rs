//! AST definitions for ASS scripts
//!
//! Zero-copy nodes using a lifetime-generic design: every field references
//! the original source text. Nodes are immutable after construction and are
//! `Send + Sync`.
//!
//! # Examples
//!
//! ```rust
//! use fontmerge_core::parser::ast::{Event, EventType, Style};
//!
//! let style = Style { name: "Default", fontname: "Verdana", ..Style::default() };
//! let event = Event {
//!     event_type: EventType::Dialogue,
//!     style: style.name,
//!     text: "Hello World!",
//!     ..Event::default()
//! };
//! assert_eq!(event.style, "Default");
//! ```

mod event;
mod style;

pub use event::{Event, EventType};
pub use style::Style;

/// Ordered `key: value` fields of the `[Script Info]` section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptInfo<'a> {
    /// Fields in document order
    pub fields: Vec<(&'a str, &'a str)>,
}

impl<'a> ScriptInfo<'a> {
    /// Look up a field by key (case-sensitive, first occurrence wins)
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.fields
            .iter()
            .find_map(|&(name, value)| (name == key).then_some(value))
    }
}
