//! Font usage analysis for ASS subtitle scripts
//!
//! Interprets the override tags of dialogue lines and extracts the set of
//! fonts a renderer would need to display the script.
//!
//! # Features
//!
//! - Per-run formatting state: font, weight, italic and drawing mode
//! - Typed warnings for unresolvable style references, no hard failures
//! - Deterministic first-use ordering, also when resolving in parallel
//!
//! # Example
//!
//! ```rust
//! use fontmerge_core::{Script, analysis::collect_fonts};
//!
//! let script_text = r#"
//! [V4+ Styles]
//! Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding
//! Style: Default,Arial,20,&H00FFFFFF,&H000000FF,&H00000000,&H00000000,0,0,0,0,100,100,0,0,1,2,0,2,10,10,10,1
//!
//! [Events]
//! Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
//! Dialogue: 0,0:00:00.00,0:00:05.00,Default,,0,0,0,,{\fn(Comic Sans)}Hello {\r}World
//! "#;
//!
//! let script = Script::parse(script_text)?;
//! let usage = collect_fonts(&script);
//!
//! assert_eq!(usage.fonts.as_slice(), ["Comic Sans", "Arial"]);
//! for warning in &usage.warnings {
//!     println!("Warning: {warning}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod collector;
pub mod resolver;
pub mod state;
pub mod warnings;

pub use collector::{
    collect_fonts, resolve_line, FontCollector, FontUsage, ResolvedLine, TextRun, UsedFontSet,
};
pub use resolver::{resolve, Resolution, StateResolver};
pub use state::{FormattingState, StyleTable, FALLBACK_FONT};
pub use warnings::{EventWarning, FontWarning};
