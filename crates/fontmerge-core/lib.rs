//! # fontmerge core
//!
//! Works out which fonts an ASS (Advanced `SubStation` Alpha) subtitle script
//! actually renders, and maps them onto font files installed on the system.
//!
//! ## Features
//!
//! - **Zero-copy parsing**: styles and events borrow `&str` spans from the source
//! - **Override-tag interpretation**: `\fn`, `\b`, `\i`, `\p`, `\r` and `\t`
//!   are folded into a per-run formatting state, the way renderers apply them
//! - **Font usage extraction**: every visible text run contributes its font
//!   name once, in first-use order, followed by the fonts of unused styles
//! - **System font lookup**: installed faces are matched by full name or
//!   family (feature `system-fonts`)
//!
//! ## Quick Start
//!
//! ```rust
//! use fontmerge_core::{analysis::collect_fonts, Script};
//!
//! let script_text = r#"
//! [V4+ Styles]
//! Format: Name, Fontname, Fontsize, Bold, Italic
//! Style: Default,Arial,20,0,0
//!
//! [Events]
//! Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
//! Dialogue: 0,0:00:00.00,0:00:05.00,Default,,0,0,0,,{\fnVerdana}Hello {\r}World!
//! "#;
//!
//! let script = Script::parse(script_text)?;
//! let usage = collect_fonts(&script);
//! assert_eq!(usage.fonts.as_slice(), ["Verdana", "Arial"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(clippy::all)]
#![deny(unsafe_code)]

pub mod analysis;
pub mod parser;
pub mod tokenizer;

#[cfg(feature = "system-fonts")]
#[cfg_attr(docsrs, doc(cfg(feature = "system-fonts")))]
pub mod fonts;

pub mod utils;

pub use analysis::{collect_fonts, FontCollector, FontUsage, FormattingState, UsedFontSet};
pub use parser::{ParseError, Script};
pub use tokenizer::{TagTokenizer, TagOccurrence};

#[cfg(feature = "system-fonts")]
pub use fonts::{FontCatalog, FontResolution};

pub use utils::CoreError;

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for core operations, using the crate's unified `CoreError`.
///
/// # Examples
///
/// ```rust
/// use fontmerge_core::{Result, Script};
///
/// fn parse_script_safely(input: &str) -> Result<Script<'_>> {
///     Script::parse(input)
/// }
/// ```
pub type Result<T> = core::result::Result<T, CoreError>;
