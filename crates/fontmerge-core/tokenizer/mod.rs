//! Override tag tokenizer for ASS dialogue text
//!
//! Splits dialogue lines into override blocks and text runs, and override
//! blocks into individual tags. Everything here is zero-copy: tags, arguments
//! and text runs are slices of the line being scanned, and every sequence is
//! produced lazily.
//!
//! # Example
//!
//! ```rust
//! use fontmerge_core::tokenizer::{LineSegmenter, TagTokenizer};
//!
//! let mut segments = LineSegmenter::new(r"{\fnArial\b1}Hello");
//! let segment = segments.next().unwrap();
//! assert_eq!(segment.text, "Hello");
//!
//! let names: Vec<_> = TagTokenizer::new(segment.tags).map(|tag| tag.name()).collect();
//! assert_eq!(names, ["fnArial", "b1"]);
//! ```

pub mod dispatch;
pub mod scanner;
pub mod segmenter;

pub use dispatch::{RecognizedTag, TagFamily};
pub use scanner::parse_leading_int;
pub use segmenter::{LineSegment, LineSegmenter};

/// Single override tag found inside a tag block
///
/// The name is the whole trimmed run after the backslash, so for `\fnArial`
/// it is `fnArial`. Splitting a name into tag family and inline argument needs
/// the family table, see [`TagOccurrence::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagOccurrence<'a> {
    /// Trimmed name run, including any inline argument
    name: &'a str,
    /// Trimmed content of the parenthesized argument, if non-empty
    parenthesized: Option<&'a str>,
}

impl<'a> TagOccurrence<'a> {
    /// Create a tag occurrence from its parts
    #[must_use]
    pub const fn new(name: &'a str, parenthesized: Option<&'a str>) -> Self {
        Self {
            name,
            parenthesized,
        }
    }

    /// Name run of the tag (e.g. `b1`, `fnArial`, `t`)
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// Parenthesized argument (e.g. `Comic Sans` for `\fn(Comic Sans)`)
    #[must_use]
    pub const fn parenthesized_argument(&self) -> Option<&'a str> {
        self.parenthesized
    }

    /// Match this tag against the font-relevant tag families
    ///
    /// Returns `None` for tags that do not influence font selection.
    #[must_use]
    pub fn classify(&self) -> Option<RecognizedTag<'a>> {
        let (family, trailing) = TagFamily::match_name(self.name)?;
        Some(RecognizedTag::new(family, self.parenthesized, trailing))
    }
}

/// Lazy tokenizer over the content of one override block
///
/// The content is the text between `{` and `}`, without the braces. Text in
/// front of the first backslash is ignored. Scanning resumes right after a
/// parenthesized argument, so the tags nested in `\t(\b1\i1)` are left for
/// the transform handler instead of being reported at this level.
#[derive(Debug, Clone)]
pub struct TagTokenizer<'a> {
    /// Override block content being scanned
    block: &'a str,
    /// Byte position of the next scan
    position: usize,
}

impl<'a> TagTokenizer<'a> {
    /// Create tokenizer for override block content
    #[must_use]
    pub const fn new(block: &'a str) -> Self {
        Self { block, position: 0 }
    }

    /// Scan a parenthesized argument starting at `open`
    ///
    /// Returns the trimmed content and the position where scanning resumes.
    /// An unterminated parenthesis captures to the end of the block.
    fn scan_parenthesized(&self, open: usize) -> (Option<&'a str>, usize) {
        let content_start = open + 1;
        let content_end = self.block[content_start..]
            .find(')')
            .map_or(self.block.len(), |offset| content_start + offset);

        let content = self.block[content_start..content_end].trim();
        if content.is_empty() {
            (None, open)
        } else {
            (Some(content), content_end)
        }
    }
}

impl<'a> Iterator for TagTokenizer<'a> {
    type Item = TagOccurrence<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let backslash = self.position + self.block[self.position..].find('\\')?;
            let name_start = backslash + 1;
            let name_end = self.block[name_start..]
                .find(['\\', '('])
                .map_or(self.block.len(), |offset| name_start + offset);

            let name = self.block[name_start..name_end].trim();
            if name.is_empty() {
                self.position = name_start;
                continue;
            }

            let parenthesized = if self.block[name_end..].starts_with('(') {
                let (content, resume) = self.scan_parenthesized(name_end);
                self.position = resume;
                content
            } else {
                self.position = name_end;
                None
            };

            return Some(TagOccurrence::new(name, parenthesized));
        }
    }
}
