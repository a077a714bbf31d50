//! Override tag interpretation
//!
//! Folds the tags of one override block over a [`FormattingState`], left to
//! right. Only the tag families that change which font is rendered are
//! interpreted; every other tag leaves the state untouched.

use super::{
    state::{StyleTable, BOLD_WEIGHT, REGULAR_WEIGHT},
    warnings::FontWarning,
    FormattingState,
};
use crate::tokenizer::{parse_leading_int, RecognizedTag, TagFamily, TagTokenizer};

/// Outcome of resolving an override block
///
/// Resolution always produces a state. Unresolvable style references are
/// reported alongside it instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Every reference resolved
    Resolved(FormattingState<'a>),
    /// State produced with fallbacks, and what they replaced
    ResolvedWithWarnings(FormattingState<'a>, Vec<FontWarning<'a>>),
}

impl<'a> Resolution<'a> {
    fn from_parts(state: FormattingState<'a>, warnings: Vec<FontWarning<'a>>) -> Self {
        if warnings.is_empty() {
            Self::Resolved(state)
        } else {
            Self::ResolvedWithWarnings(state, warnings)
        }
    }

    /// Resulting state
    #[must_use]
    pub const fn state(&self) -> FormattingState<'a> {
        match self {
            Self::Resolved(state) | Self::ResolvedWithWarnings(state, _) => *state,
        }
    }

    /// Warnings raised while resolving (empty for `Resolved`)
    #[must_use]
    pub fn warnings(&self) -> &[FontWarning<'a>] {
        match self {
            Self::Resolved(_) => &[],
            Self::ResolvedWithWarnings(_, warnings) => warnings.as_slice(),
        }
    }

    /// Whether resolution needed no fallback
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Split into state and warnings
    #[must_use]
    pub fn into_parts(self) -> (FormattingState<'a>, Vec<FontWarning<'a>>) {
        match self {
            Self::Resolved(state) => (state, Vec::new()),
            Self::ResolvedWithWarnings(state, warnings) => (state, warnings),
        }
    }
}

/// Tag interpreter bound to one line
///
/// Holds what stays fixed while a line is processed: the document's styles
/// and the line's default state, which `\fn`, `\b`, `\i` and `\r` fall back
/// to.
///
/// # Example
///
/// ```rust
/// use fontmerge_core::analysis::{FormattingState, StateResolver, StyleTable};
///
/// let styles = StyleTable::default();
/// let line_default = FormattingState::fallback();
/// let resolver = StateResolver::new(&styles, line_default);
///
/// let state = resolver.resolve(r"\fnVerdana\b1", line_default).state();
/// assert_eq!(state.font, "Verdana");
/// assert_eq!(state.weight, 700);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StateResolver<'s, 'a> {
    /// Document styles, read-only during resolution
    styles: &'s StyleTable<'a>,
    /// Default state of the line being resolved
    line_default: FormattingState<'a>,
}

impl<'s, 'a> StateResolver<'s, 'a> {
    /// Create resolver for a line with the given default state
    #[must_use]
    pub const fn new(styles: &'s StyleTable<'a>, line_default: FormattingState<'a>) -> Self {
        Self {
            styles,
            line_default,
        }
    }

    /// Default state of the line
    #[must_use]
    pub const fn line_default(&self) -> FormattingState<'a> {
        self.line_default
    }

    /// Apply the tags of one override block (content without braces) to `current`
    #[must_use]
    pub fn resolve(&self, block: &'a str, current: FormattingState<'a>) -> Resolution<'a> {
        let mut warnings = Vec::new();
        let state = self.fold(block, current, &mut warnings);
        Resolution::from_parts(state, warnings)
    }

    fn fold(
        &self,
        block: &'a str,
        current: FormattingState<'a>,
        warnings: &mut Vec<FontWarning<'a>>,
    ) -> FormattingState<'a> {
        TagTokenizer::new(block)
            .filter_map(|occurrence| occurrence.classify())
            .fold(current, |state, tag| self.apply(tag, state, warnings))
    }

    fn apply(
        &self,
        tag: RecognizedTag<'a>,
        state: FormattingState<'a>,
        warnings: &mut Vec<FontWarning<'a>>,
    ) -> FormattingState<'a> {
        let line = self.line_default;
        let argument = tag.argument();

        match tag.family() {
            TagFamily::FontName => FormattingState {
                // `@` selects the vertical variant of the same font
                font: argument.map_or(line.font, |name| name.strip_prefix('@').unwrap_or(name)),
                ..state
            },
            TagFamily::Weight => FormattingState {
                weight: weight_from_value(argument.map(parse_leading_int), line.weight),
                ..state
            },
            TagFamily::Italic => FormattingState {
                italic: match argument.map(parse_leading_int) {
                    Some(0) => false,
                    Some(1) => true,
                    _ => line.italic,
                },
                ..state
            },
            TagFamily::Drawing => FormattingState {
                drawing: argument.map_or(0, parse_leading_int) != 0,
                ..state
            },
            TagFamily::Reset => {
                let target = match argument {
                    None => line,
                    Some(name) => self.styles.get(name).unwrap_or_else(|| {
                        warnings.push(FontWarning::UnknownResetStyle { style: name });
                        line
                    }),
                };
                FormattingState {
                    drawing: state.drawing,
                    ..target
                }
            }
            TagFamily::Transform => {
                argument.map_or(state, |nested| self.fold(nested, state, warnings))
            }
        }
    }
}

/// Map a scanned `\b` value to a weight
///
/// `0` is regular and `1`/`-1` bold. Values in 100..=900 are explicit weights.
/// Anything else, or no value at all, falls back to `line_weight`.
///
/// # Example
///
/// ```rust
/// use fontmerge_core::analysis::resolver::weight_from_value;
///
/// assert_eq!(weight_from_value(Some(1), 400), 700);
/// assert_eq!(weight_from_value(Some(250), 400), 250);
/// assert_eq!(weight_from_value(Some(950), 700), 700);
/// assert_eq!(weight_from_value(None, 400), 400);
/// ```
#[must_use]
pub fn weight_from_value(value: Option<i64>, line_weight: u16) -> u16 {
    match value {
        Some(0) => REGULAR_WEIGHT,
        Some(1 | -1) => BOLD_WEIGHT,
        Some(weight @ 100..=900) => u16::try_from(weight).unwrap_or(line_weight),
        _ => line_weight,
    }
}

/// Resolve one override block without building a [`StateResolver`] first
///
/// `block` is the content between the braces; `current` is the state before
/// the block, `line_default` the default state of the line's style.
#[must_use]
pub fn resolve<'a>(
    block: &'a str,
    current: FormattingState<'a>,
    line_default: FormattingState<'a>,
    styles: &StyleTable<'a>,
) -> Resolution<'a> {
    StateResolver::new(styles, line_default).resolve(block, current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Style;

    fn table() -> StyleTable<'static> {
        StyleTable::from_styles(&[
            Style {
                name: "Default",
                fontname: "Verdana",
                ..Style::default()
            },
            Style {
                name: "Sign",
                fontname: "Impact",
                bold: "-1",
                italic: "1",
                ..Style::default()
            },
        ])
    }

    fn line_default() -> FormattingState<'static> {
        FormattingState {
            font: "Verdana",
            italic: false,
            weight: REGULAR_WEIGHT,
            drawing: false,
        }
    }

    fn apply(block: &'static str, current: FormattingState<'static>) -> Resolution<'static> {
        resolve(block, current, line_default(), &table())
    }

    fn state(block: &'static str) -> FormattingState<'static> {
        apply(block, line_default()).state()
    }

    #[test]
    fn unrecognized_tags_leave_state_unchanged() {
        let current = FormattingState {
            font: "Georgia",
            italic: true,
            weight: 300,
            drawing: true,
        };
        let resolution = apply(r"\blur3\be1\bord2\pos(1,2)\pbo5\iclip(0,0,1,1)\c&HFF&", current);
        assert_eq!(resolution, Resolution::Resolved(current));
    }

    #[test]
    fn empty_block_is_identity() {
        let current = state(r"\fnGeorgia\b1\i1");
        assert_eq!(apply("", current).state(), current);
        assert_eq!(apply("", current).state(), apply("", apply("", current).state()).state());
    }

    #[test]
    fn font_name() {
        assert_eq!(state(r"\fnComic Sans MS").font, "Comic Sans MS");
        assert_eq!(state(r"\fn(Comic Sans)").font, "Comic Sans");
        assert_eq!(state(r"\fn @Meiryo").font, "Meiryo");
        assert_eq!(state(r"\fn@").font, "");

        let changed = state(r"\fnGeorgia");
        assert_eq!(apply(r"\fn", changed).state().font, "Verdana");
    }

    #[test]
    fn parenthesized_argument_wins() {
        assert_eq!(state(r"\fnArial(Georgia)").font, "Georgia");
    }

    #[test]
    fn weight_values() {
        assert_eq!(state(r"\b0").weight, 400);
        assert_eq!(state(r"\b1").weight, 700);
        assert_eq!(state(r"\b-1").weight, 700);
        assert_eq!(state(r"\b250").weight, 250);
        assert_eq!(state(r"\b100").weight, 100);
        assert_eq!(state(r"\b900").weight, 900);
    }

    #[test]
    fn weight_falls_back_to_line_not_current() {
        let heavy = state(r"\b900");
        assert_eq!(apply(r"\b950", heavy).state().weight, 400);
        assert_eq!(apply(r"\b", heavy).state().weight, 400);
        assert_eq!(apply(r"\b50", heavy).state().weight, 400);
        assert_eq!(apply(r"\bx", heavy).state().weight, 400);
    }

    #[test]
    fn italic_values() {
        assert!(state(r"\i1").italic);
        let italic = state(r"\i1");
        assert!(!apply(r"\i0", italic).state().italic);
        assert!(!apply(r"\i", italic).state().italic);
        assert!(!apply(r"\i5", italic).state().italic);
    }

    #[test]
    fn drawing_mode() {
        assert!(state(r"\p1").drawing);
        assert!(state(r"\p4").drawing);
        let drawing = state(r"\p1");
        assert!(!apply(r"\p0", drawing).state().drawing);
        assert!(!apply(r"\p", drawing).state().drawing);
        assert_eq!(drawing.font, "Verdana");
    }

    #[test]
    fn reset_to_line_default_keeps_drawing() {
        let current = state(r"\fnGeorgia\b1\i1\p1");
        let reset = apply(r"\r", current).state();
        assert_eq!(
            reset,
            FormattingState {
                drawing: true,
                ..line_default()
            }
        );
    }

    #[test]
    fn reset_to_named_style() {
        let reset = state(r"\rSign");
        assert_eq!(reset.font, "Impact");
        assert_eq!(reset.weight, 700);
        assert!(reset.italic);

        assert_eq!(state(r"\r(Sign)").font, "Impact");
    }

    #[test]
    fn reset_to_unknown_style_warns() {
        let current = state(r"\fnGeorgia");
        let resolution = apply(r"\r(Nonexistent)", current);
        assert!(!resolution.is_clean());
        assert_eq!(resolution.state(), line_default());
        assert_eq!(
            resolution.warnings(),
            [FontWarning::UnknownResetStyle {
                style: "Nonexistent"
            }]
        );
    }

    #[test]
    fn later_tags_override_earlier() {
        let result = state(r"\fnArial\b1\fnGeorgia\b0");
        assert_eq!(result.font, "Georgia");
        assert_eq!(result.weight, 400);
    }

    #[test]
    fn transform_equals_sequential_application() {
        let start = state(r"\fnGeorgia");
        let nested = apply(r"\t(\b1\i1)", start).state();
        let sequential = apply(r"\i1", apply(r"\b1", start).state()).state();
        assert_eq!(nested, sequential);
    }

    #[test]
    fn transform_starts_from_current_state() {
        let start = state(r"\fnGeorgia");
        let result = apply(r"\t(0,500,\b1)", start).state();
        assert_eq!(result.font, "Georgia");
        assert_eq!(result.weight, 700);
    }

    #[test]
    fn transform_weight_fallback_uses_line_default() {
        let start = state(r"\b900");
        assert_eq!(apply(r"\t(\b950)", start).state().weight, 400);
    }

    #[test]
    fn empty_transform_is_inert() {
        let start = state(r"\fnGeorgia");
        assert_eq!(apply(r"\t()", start).state(), start);
        assert_eq!(apply(r"\t", start).state(), start);
    }

    #[test]
    fn transform_collects_nested_warnings() {
        let resolution = apply(r"\t(\rMissing)", line_default());
        assert_eq!(resolution.warnings().len(), 1);
    }

    #[test]
    fn weight_mapping_edges() {
        assert_eq!(weight_from_value(Some(99), 555), 555);
        assert_eq!(weight_from_value(Some(901), 555), 555);
        assert_eq!(weight_from_value(Some(i64::MAX), 555), 555);
        assert_eq!(weight_from_value(Some(-2), 555), 555);
    }
}
