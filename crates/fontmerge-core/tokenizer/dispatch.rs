//! Tag family dispatch table
//!
//! ASS tag names share prefixes: `\b` (bold) versus `\blur`, `\be` and
//! `\bord`, `\p` (drawing) versus `\pos` and `\pbo`. Inline arguments are glued
//! to the name (`\b700`, `\fnArial`), so a tag is recognized by prefix and the
//! longer names sharing that prefix are excluded explicitly. Rows are tried in
//! order and the first match wins.

/// Override tag families that influence font selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TagFamily {
    /// `\fn` font name
    FontName,
    /// `\b` bold flag or weight
    Weight,
    /// `\i` italic flag
    Italic,
    /// `\p` drawing mode scale
    Drawing,
    /// `\r` reset to line style or named style
    Reset,
    /// `\t` animated transform with nested tags
    Transform,
}

/// One row of the dispatch table
#[derive(Debug)]
struct TagRule {
    /// Prefix the tag name must start with
    prefix: &'static str,
    /// Longer tag names that share the prefix but belong elsewhere
    excluded: &'static [&'static str],
    /// Family recognized by this row
    family: TagFamily,
}

impl TagRule {
    /// Remainder of `name` after the prefix when this row matches
    fn matches<'a>(&self, name: &'a str) -> Option<&'a str> {
        let rest = name.strip_prefix(self.prefix)?;
        if self.excluded.iter().any(|excluded| name.starts_with(excluded)) {
            None
        } else {
            Some(rest)
        }
    }
}

/// Font-relevant tag families in matching order
const TAG_RULES: [TagRule; 6] = [
    TagRule {
        prefix: "fn",
        excluded: &[],
        family: TagFamily::FontName,
    },
    TagRule {
        prefix: "b",
        excluded: &["blur", "be", "bord"],
        family: TagFamily::Weight,
    },
    TagRule {
        prefix: "i",
        excluded: &["iclip"],
        family: TagFamily::Italic,
    },
    TagRule {
        prefix: "p",
        excluded: &["pos", "pbo"],
        family: TagFamily::Drawing,
    },
    TagRule {
        prefix: "r",
        excluded: &[],
        family: TagFamily::Reset,
    },
    TagRule {
        prefix: "t",
        excluded: &[],
        family: TagFamily::Transform,
    },
];

impl TagFamily {
    /// Match a tag name run against the dispatch table
    ///
    /// Returns the family and the inline argument glued to the name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fontmerge_core::tokenizer::TagFamily;
    ///
    /// assert_eq!(TagFamily::match_name("b700"), Some((TagFamily::Weight, "700")));
    /// assert_eq!(TagFamily::match_name("bord2"), None);
    /// assert_eq!(TagFamily::match_name("pos"), None);
    /// ```
    #[must_use]
    pub fn match_name(name: &str) -> Option<(Self, &str)> {
        TAG_RULES
            .iter()
            .find_map(|rule| rule.matches(name).map(|rest| (rule.family, rest)))
    }
}

/// Tag matched to a family, with its effective argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecognizedTag<'a> {
    /// Family the tag belongs to
    family: TagFamily,
    /// Parenthesized argument, if any
    parenthesized: Option<&'a str>,
    /// Inline argument following the family prefix, if non-empty
    trailing: Option<&'a str>,
}

impl<'a> RecognizedTag<'a> {
    /// Build a recognized tag from the raw remainder after the family prefix
    #[must_use]
    pub fn new(family: TagFamily, parenthesized: Option<&'a str>, trailing: &'a str) -> Self {
        let trailing = trailing.trim_start();
        Self {
            family,
            parenthesized,
            trailing: (!trailing.is_empty()).then_some(trailing),
        }
    }

    /// Family of the tag
    #[must_use]
    pub const fn family(&self) -> TagFamily {
        self.family
    }

    /// Inline argument following the tag name (`Arial` in `\fn Arial`)
    #[must_use]
    pub const fn trailing_argument(&self) -> Option<&'a str> {
        self.trailing
    }

    /// Effective argument: the parenthesized one wins over the inline one
    #[must_use]
    pub fn argument(&self) -> Option<&'a str> {
        self.parenthesized.or(self.trailing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_excludes_longer_b_tags() {
        assert_eq!(TagFamily::match_name("b"), Some((TagFamily::Weight, "")));
        assert_eq!(TagFamily::match_name("b1"), Some((TagFamily::Weight, "1")));
        assert_eq!(TagFamily::match_name("blur3"), None);
        assert_eq!(TagFamily::match_name("be1"), None);
        assert_eq!(TagFamily::match_name("bord2"), None);
    }

    #[test]
    fn drawing_excludes_position_tags() {
        assert_eq!(TagFamily::match_name("p1"), Some((TagFamily::Drawing, "1")));
        assert_eq!(TagFamily::match_name("pos"), None);
        assert_eq!(TagFamily::match_name("pbo-5"), None);
    }

    #[test]
    fn italic_excludes_inverse_clip() {
        assert_eq!(TagFamily::match_name("i1"), Some((TagFamily::Italic, "1")));
        assert_eq!(TagFamily::match_name("iclip"), None);
    }

    #[test]
    fn font_name_keeps_inline_argument() {
        assert_eq!(
            TagFamily::match_name("fn Comic Sans"),
            Some((TagFamily::FontName, " Comic Sans"))
        );
        assert_eq!(TagFamily::match_name("fs20"), None);
        assert_eq!(TagFamily::match_name("fscx120"), None);
    }

    #[test]
    fn reset_and_transform() {
        assert_eq!(TagFamily::match_name("rSign"), Some((TagFamily::Reset, "Sign")));
        assert_eq!(TagFamily::match_name("t"), Some((TagFamily::Transform, "")));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(TagFamily::match_name("B1"), None);
        assert_eq!(TagFamily::match_name("FN"), None);
    }

    #[test]
    fn inert_tags_are_unrecognized() {
        for name in ["c&H0000FF&", "alpha&H80&", "an8", "k50", "shad2", "u1", "s1", "fad(0,0)", "org", "move", "clip", "q2", "frz45", "xbord1"] {
            assert_eq!(TagFamily::match_name(name), None, "{name}");
        }
    }

    #[test]
    fn parenthesized_argument_wins() {
        let tag = RecognizedTag::new(TagFamily::FontName, Some("Verdana"), "Arial");
        assert_eq!(tag.argument(), Some("Verdana"));
        assert_eq!(tag.trailing_argument(), Some("Arial"));
    }

    #[test]
    fn blank_trailing_argument_is_absent() {
        let tag = RecognizedTag::new(TagFamily::Weight, None, "   ");
        assert_eq!(tag.argument(), None);
        assert_eq!(tag.trailing_argument(), None);
    }
}
