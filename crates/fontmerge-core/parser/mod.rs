//! ASS script parser module
//!
//! Zero-copy parsing of the parts of an ASS script that decide which fonts
//! get rendered: `[Script Info]`, the styles sections and `[Events]`. Every
//! AST node borrows from the source text. Other sections (`[Fonts]`,
//! `[Graphics]`, project garbage) are recognized and skipped.
//!
//! # Example
//!
//! ```rust
//! use fontmerge_core::parser::Script;
//!
//! let script_text = r#"
//! [Script Info]
//! Title: Example
//! ScriptType: v4.00+
//!
//! [V4+ Styles]
//! Format: Name, Fontname, Fontsize, Bold, Italic
//! Style: Default,Verdana,20,0,0
//!
//! [Events]
//! Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
//! Dialogue: 0,0:00:00.00,0:00:05.00,Default,,0,0,0,,Hello World!
//! "#;
//!
//! let script = Script::parse(script_text)?;
//! assert_eq!(script.styles()[0].fontname, "Verdana");
//! assert_eq!(script.events().len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod ast;
pub mod errors;
pub mod sections;

mod script;

pub use ast::{Event, EventType, ScriptInfo, Style};
pub use errors::{IssueCategory, IssueSeverity, ParseError, ParseIssue};
pub use script::Script;
