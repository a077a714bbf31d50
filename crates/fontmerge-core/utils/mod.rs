//! Utility functions and shared types for fontmerge core
//!
//! Contains the helpers shared by the parser, tokenizer, analysis and font
//! modules: the unified error type, ahash-backed collections and BOM handling.
//!
//! # Example
//!
//! ```rust
//! use fontmerge_core::utils::strip_bom;
//!
//! let (text, had_bom) = strip_bom("\u{FEFF}[Script Info]");
//! assert_eq!(text, "[Script Info]");
//! assert!(had_bom);
//! ```

pub mod errors;
pub mod hashers;

pub use errors::CoreError;
pub use hashers::{
    create_hash_map, create_hash_set, create_hash_set_with_capacity, AHashMap, AHashSet,
};

/// UTF-8 byte order mark as it appears in decoded text
const UTF8_BOM: char = '\u{FEFF}';

/// Strip a leading UTF-8 byte order mark
///
/// Subtitle editors on Windows routinely save scripts with a BOM, which would
/// otherwise end up glued to the first section header.
///
/// # Returns
///
/// The text without the BOM and whether one was present.
#[must_use]
pub fn strip_bom(text: &str) -> (&str, bool) {
    text.strip_prefix(UTF8_BOM)
        .map_or((text, false), |stripped| (stripped, true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_bom_present() {
        assert_eq!(strip_bom("\u{FEFF}abc"), ("abc", true));
    }

    #[test]
    fn strip_bom_absent() {
        assert_eq!(strip_bom("abc"), ("abc", false));
        assert_eq!(strip_bom(""), ("", false));
    }

    #[test]
    fn strip_bom_only_once() {
        assert_eq!(strip_bom("\u{FEFF}\u{FEFF}x"), ("\u{FEFF}x", true));
    }
}
