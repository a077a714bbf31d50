//! Dialogue line segmentation into override blocks and text runs
//!
//! A dialogue line alternates between `{...}` override blocks and visible
//! text. The segmenter pairs each block with the text that follows it; text
//! in front of the first block gets an empty block.

/// One override block and the text following it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSegment<'a> {
    /// Content between the braces, without the braces (may be empty)
    pub tags: &'a str,
    /// Visible text up to the next `{` (may be empty)
    pub text: &'a str,
}

/// Lazy segmenter over a single dialogue line
///
/// Tolerates malformed braces the way renderers do: an unclosed `{` swallows
/// the rest of the line as block content, a stray `}` is ordinary text and a
/// `{` inside a block is ordinary block content. Concatenating the `text` of
/// every segment yields the visible text of the line.
///
/// # Example
///
/// ```rust
/// use fontmerge_core::tokenizer::LineSegmenter;
///
/// let texts: Vec<_> = LineSegmenter::new(r"A{\b1}B{}C").map(|s| s.text).collect();
/// assert_eq!(texts, ["A", "B", "C"]);
/// ```
#[derive(Debug, Clone)]
pub struct LineSegmenter<'a> {
    /// Line being segmented
    line: &'a str,
    /// Byte position of the next segment
    position: usize,
}

impl<'a> LineSegmenter<'a> {
    /// Create segmenter for one dialogue line
    #[must_use]
    pub const fn new(line: &'a str) -> Self {
        Self { line, position: 0 }
    }
}

impl<'a> Iterator for LineSegmenter<'a> {
    type Item = LineSegment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.line.len() {
            return None;
        }

        let rest = &self.line[self.position..];
        let (tags, text_start) = match rest.strip_prefix('{') {
            Some(inner) => match inner.find('}') {
                Some(close) => (&inner[..close], self.position + 1 + close + 1),
                None => (inner, self.line.len()),
            },
            None => ("", self.position),
        };

        let text_end = self.line[text_start..]
            .find('{')
            .map_or(self.line.len(), |offset| text_start + offset);

        self.position = text_end;
        Some(LineSegment {
            tags,
            text: &self.line[text_start..text_end],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(line: &str) -> Vec<(&str, &str)> {
        LineSegmenter::new(line)
            .map(|segment| (segment.tags, segment.text))
            .collect()
    }

    #[test]
    fn plain_text_has_empty_block() {
        assert_eq!(segments("Hello World"), [("", "Hello World")]);
    }

    #[test]
    fn blocks_pair_with_following_text() {
        assert_eq!(
            segments(r"{\fn(Comic Sans)}Hello {\r}World"),
            [(r"\fn(Comic Sans)", "Hello "), (r"\r", "World")]
        );
    }

    #[test]
    fn empty_blocks_and_texts_are_yielded() {
        assert_eq!(segments("{}{}x"), [("", ""), ("", "x")]);
        assert_eq!(segments(r"{\b1}"), [(r"\b1", "")]);
    }

    #[test]
    fn text_before_first_block() {
        assert_eq!(segments(r"A{\i1}B"), [("", "A"), (r"\i1", "B")]);
    }

    #[test]
    fn unclosed_block_consumes_line() {
        assert_eq!(segments(r"A{\b1 never closed"), [("", "A"), (r"\b1 never closed", "")]);
    }

    #[test]
    fn stray_close_brace_is_text() {
        assert_eq!(segments(r"a}b{\i1}c}"), [("", "a}b"), (r"\i1", "c}")]);
    }

    #[test]
    fn open_brace_inside_block_is_content() {
        assert_eq!(segments(r"{a{b}c"), [("a{b", "c")]);
    }

    #[test]
    fn text_reconstructs_visible_line() {
        let line = r"{\p1}m 0 0 l 10 10{\p0}caption {\b1}bold}";
        let visible: String = LineSegmenter::new(line).map(|s| s.text).collect();
        assert_eq!(visible, "m 0 0 l 10 10caption bold}");
    }

    #[test]
    fn empty_line_yields_nothing() {
        assert!(segments("").is_empty());
    }

    #[test]
    fn multibyte_text_is_sliced_on_char_boundaries() {
        assert_eq!(
            segments("日本{\\i1}語"),
            [("", "日本"), (r"\i1", "語")]
        );
    }
}
