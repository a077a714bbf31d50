//! Document-wide font usage collection
//!
//! Walks every event except comments, resolves the formatting state of each visible
//! text run and records the fonts in first-use order. Declared styles add
//! their own fonts at the end even when no event uses them.

use super::{
    resolver::StateResolver,
    state::StyleTable,
    warnings::{EventWarning, FontWarning},
    FormattingState,
};
use crate::{
    parser::{Event, Script, Style},
    tokenizer::LineSegmenter,
    utils::{create_hash_set, AHashSet},
};

/// Ordered set of font identifiers
///
/// Keeps insertion order and rejects duplicates. Identifiers are compared
/// exactly as written; normalization is left to font matching.
///
/// # Example
///
/// ```rust
/// use fontmerge_core::analysis::UsedFontSet;
///
/// let mut fonts = UsedFontSet::new();
/// assert!(fonts.insert("Verdana"));
/// assert!(fonts.insert("Arial"));
/// assert!(!fonts.insert("Verdana"));
/// assert_eq!(fonts.as_slice(), ["Verdana", "Arial"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct UsedFontSet<'a> {
    /// Identifiers in first-insertion order
    order: Vec<&'a str>,
    /// Membership index over `order`
    seen: AHashSet<&'a str>,
}

impl<'a> UsedFontSet<'a> {
    /// Create empty set
    #[must_use]
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            seen: create_hash_set(),
        }
    }

    /// Add a font; returns `false` when it was already present
    pub fn insert(&mut self, font: &'a str) -> bool {
        if self.seen.insert(font) {
            self.order.push(font);
            true
        } else {
            false
        }
    }

    /// Whether the font was recorded
    #[must_use]
    pub fn contains(&self, font: &str) -> bool {
        self.seen.contains(font)
    }

    /// Fonts in first-use order
    #[must_use]
    pub fn as_slice(&self) -> &[&'a str] {
        &self.order
    }

    /// Iterate fonts in first-use order
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.order.iter().copied()
    }

    /// Number of distinct fonts
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no font was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl PartialEq for UsedFontSet<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
    }
}

impl Eq for UsedFontSet<'_> {}

impl<'a> Extend<&'a str> for UsedFontSet<'a> {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, fonts: I) {
        for font in fonts {
            self.insert(font);
        }
    }
}

impl<'a> FromIterator<&'a str> for UsedFontSet<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(fonts: I) -> Self {
        let mut set = Self::new();
        set.extend(fonts);
        set
    }
}

impl<'s, 'a> IntoIterator for &'s UsedFontSet<'a> {
    type Item = &'s &'a str;
    type IntoIter = core::slice::Iter<'s, &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for UsedFontSet<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.order)
    }
}

/// Visible text with the formatting it is rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TextRun<'a> {
    /// Text between override blocks
    pub text: &'a str,
    /// State in effect for the text
    pub state: FormattingState<'a>,
}

/// Fully resolved dialogue line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedLine<'a> {
    /// Non-empty text runs in line order
    pub runs: Vec<TextRun<'a>>,
    /// Warnings raised by override tags on the line
    pub warnings: Vec<FontWarning<'a>>,
}

/// Resolve every visible run of a dialogue line
///
/// The state starts at `line_default` and is advanced by each non-empty
/// override block; empty text runs are dropped.
///
/// # Example
///
/// ```rust
/// use fontmerge_core::analysis::{resolve_line, FormattingState, StyleTable};
///
/// let line = resolve_line(r"{\p1}m 0 0 l 10 10{\p0}text", FormattingState::fallback(), &StyleTable::default());
/// assert!(line.runs[0].state.drawing);
/// assert!(!line.runs[1].state.drawing);
/// ```
#[must_use]
pub fn resolve_line<'a>(
    text: &'a str,
    line_default: FormattingState<'a>,
    styles: &StyleTable<'a>,
) -> ResolvedLine<'a> {
    let resolver = StateResolver::new(styles, line_default);
    let mut line = ResolvedLine::default();
    let mut state = line_default;

    for segment in LineSegmenter::new(text) {
        if !segment.tags.is_empty() {
            let (next, mut warnings) = resolver.resolve(segment.tags, state).into_parts();
            state = next;
            line.warnings.append(&mut warnings);
        }
        if !segment.text.is_empty() {
            line.runs.push(TextRun {
                text: segment.text,
                state,
            });
        }
    }

    line
}

/// Fonts used by a document and the problems met while collecting them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FontUsage<'a> {
    /// Used fonts: first-use order, then unused style fonts
    pub fonts: UsedFontSet<'a>,
    /// Recoverable problems, in event order
    pub warnings: Vec<EventWarning<'a>>,
}

/// Per-event result before merging
struct EventFonts<'a> {
    /// Fonts of the visible runs, in run order
    fonts: Vec<&'a str>,
    /// Warnings raised by the event
    warnings: Vec<EventWarning<'a>>,
}

/// Font usage extraction over a document's styles and events
///
/// # Example
///
/// ```rust
/// use fontmerge_core::{FontCollector, Script};
///
/// let script = Script::parse(r"[V4+ Styles]
/// Format: Name, Fontname, Bold, Italic
/// Style: Default,Verdana,0,0
///
/// [Events]
/// Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
/// Dialogue: 0,0:00:00.00,0:00:05.00,Foo,,0,0,0,,{\b1}Bold
/// ")?;
///
/// let usage = FontCollector::from_script(&script).collect();
/// assert_eq!(usage.fonts.as_slice(), ["Arial", "Verdana"]);
/// assert_eq!(usage.warnings.len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct FontCollector<'s, 'a> {
    /// Default states of the declared styles
    styles: StyleTable<'a>,
    /// Events in document order
    events: &'s [Event<'a>],
}

impl<'s, 'a> FontCollector<'s, 'a> {
    /// Create collector over style definitions and events
    #[must_use]
    pub fn new(styles: &[Style<'a>], events: &'s [Event<'a>]) -> Self {
        Self {
            styles: StyleTable::from_styles(styles),
            events,
        }
    }

    /// Create collector over a parsed script
    #[must_use]
    pub fn from_script(script: &'s Script<'a>) -> Self {
        Self::new(script.styles(), script.events())
    }

    /// Style table the collector resolves against
    #[must_use]
    pub const fn style_table(&self) -> &StyleTable<'a> {
        &self.styles
    }

    /// Collect used fonts, one event after the other
    #[must_use]
    pub fn collect(&self) -> FontUsage<'a> {
        let per_event = self
            .events
            .iter()
            .enumerate()
            .filter(|(_, event)| !event.is_comment())
            .map(|(index, event)| self.event_fonts(index, event));
        self.merge(per_event)
    }

    /// Collect used fonts, resolving events on the rayon thread pool
    ///
    /// Per-event results are merged in event order, so the outcome is
    /// identical to [`FontCollector::collect`].
    #[cfg(feature = "parallel")]
    #[must_use]
    pub fn collect_parallel(&self) -> FontUsage<'a> {
        use rayon::prelude::*;

        let per_event: Vec<EventFonts<'a>> = self
            .events
            .par_iter()
            .enumerate()
            .filter(|(_, event)| !event.is_comment())
            .map(|(index, event)| self.event_fonts(index, event))
            .collect();
        self.merge(per_event)
    }

    fn event_fonts(&self, index: usize, event: &Event<'a>) -> EventFonts<'a> {
        let mut warnings = Vec::new();
        let warn = |warning| EventWarning {
            event: index + 1,
            line: event.line,
            warning,
        };

        let line_default = self.styles.get(event.style).unwrap_or_else(|| {
            warnings.push(warn(FontWarning::UnknownLineStyle { style: event.style }));
            FormattingState::fallback()
        });

        let line = resolve_line(event.text, line_default, &self.styles);
        warnings.extend(line.warnings.into_iter().map(warn));

        EventFonts {
            fonts: line.runs.iter().map(|run| run.state.font).collect(),
            warnings,
        }
    }

    fn merge(&self, per_event: impl IntoIterator<Item = EventFonts<'a>>) -> FontUsage<'a> {
        let mut usage = FontUsage::default();
        for event in per_event {
            usage.fonts.extend(event.fonts);
            usage.warnings.extend(event.warnings);
        }
        usage.fonts.extend(self.styles.iter().map(|(_, state)| state.font));

        log::debug!(
            "collected {} fonts with {} warnings",
            usage.fonts.len(),
            usage.warnings.len()
        );
        usage
    }
}

/// Collect the fonts a parsed script uses
///
/// Resolves events on the rayon pool when the `parallel` feature is on; the
/// result is the same either way.
#[must_use]
pub fn collect_fonts<'a>(script: &Script<'a>) -> FontUsage<'a> {
    let collector = FontCollector::from_script(script);

    #[cfg(feature = "parallel")]
    {
        collector.collect_parallel()
    }
    #[cfg(not(feature = "parallel"))]
    {
        collector.collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::EventType;
    use pretty_assertions::assert_eq;

    fn style<'a>(name: &'a str, fontname: &'a str) -> Style<'a> {
        Style {
            name,
            fontname,
            ..Style::default()
        }
    }

    fn dialogue<'a>(style: &'a str, text: &'a str) -> Event<'a> {
        Event {
            event_type: EventType::Dialogue,
            style,
            text,
            ..Event::default()
        }
    }

    #[test]
    fn used_font_set_order_and_uniqueness() {
        let fonts: UsedFontSet = ["B", "A", "B", "C", "A"].into_iter().collect();
        assert_eq!(fonts.as_slice(), ["B", "A", "C"]);
        assert!(fonts.contains("C"));
        assert!(!fonts.contains("c"));
        assert_eq!(fonts.len(), 3);
        assert_eq!((&fonts).into_iter().count(), 3);
    }

    #[test]
    fn resolve_line_drops_empty_runs() {
        let line = resolve_line(
            r"{\fnGeorgia}{\b1}Hi{}",
            FormattingState::fallback(),
            &StyleTable::default(),
        );
        assert_eq!(line.runs.len(), 1);
        assert_eq!(line.runs[0].text, "Hi");
        assert_eq!(line.runs[0].state.font, "Georgia");
        assert_eq!(line.runs[0].state.weight, 700);
    }

    #[test]
    fn state_restarts_per_line() {
        let styles = [style("Default", "Verdana")];
        let events = [
            dialogue("Default", r"{\fnGeorgia}one"),
            dialogue("Default", "two"),
        ];
        let usage = FontCollector::new(&styles, &events).collect();
        assert_eq!(usage.fonts.as_slice(), ["Georgia", "Verdana"]);
    }

    #[test]
    fn comments_are_skipped() {
        let styles = [style("Default", "Verdana")];
        let events = [
            Event {
                event_type: EventType::Comment,
                ..dialogue("Default", r"{\fnComic Sans MS}hidden")
            },
            dialogue("Default", "shown"),
        ];
        let usage = FontCollector::new(&styles, &events).collect();
        assert_eq!(usage.fonts.as_slice(), ["Verdana"]);
    }

    #[test]
    fn legacy_event_kinds_contribute_fonts() {
        let styles = [style("Default", "Verdana")];
        let events = [
            Event {
                event_type: EventType::Picture,
                ..dialogue("Default", r"{\fnGeorgia}logo.bmp")
            },
            Event {
                event_type: EventType::Command,
                ..dialogue("Default", r"{\fnImpact}run")
            },
        ];
        let collector = FontCollector::new(&styles, &events);
        let usage = collector.collect();
        assert_eq!(usage.fonts.as_slice(), ["Georgia", "Impact", "Verdana"]);
        #[cfg(feature = "parallel")]
        assert_eq!(collector.collect_parallel(), usage);
    }

    #[test]
    fn unused_style_fonts_are_appended_in_declaration_order() {
        let styles = [
            style("Default", "Verdana"),
            style("Sign", "Impact"),
            style("Note", "Verdana"),
            style("Title", "Georgia"),
        ];
        let events = [dialogue("Title", "x")];
        let usage = FontCollector::new(&styles, &events).collect();
        assert_eq!(usage.fonts.as_slice(), ["Georgia", "Verdana", "Impact"]);
    }

    #[test]
    fn warnings_carry_event_position() {
        let styles = [style("Default", "Verdana")];
        let events = [
            Event {
                event_type: EventType::Comment,
                ..dialogue("Default", "c")
            },
            Event {
                line: 12,
                ..dialogue("Missing", r"{\rGone}x")
            },
        ];
        let usage = FontCollector::new(&styles, &events).collect();
        assert_eq!(
            usage.warnings,
            [
                EventWarning {
                    event: 2,
                    line: 12,
                    warning: FontWarning::UnknownLineStyle { style: "Missing" },
                },
                EventWarning {
                    event: 2,
                    line: 12,
                    warning: FontWarning::UnknownResetStyle { style: "Gone" },
                },
            ]
        );
        assert_eq!(usage.fonts.as_slice(), ["Arial", "Verdana"]);
    }

    #[test]
    fn line_without_text_contributes_nothing() {
        let styles = [style("Default", "Verdana")];
        let events = [dialogue("Default", r"{\fnGeorgia}")];
        let usage = FontCollector::new(&styles, &events).collect();
        assert_eq!(usage.fonts.as_slice(), ["Verdana"]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_sequential() {
        let styles = [style("Default", "Verdana"), style("Sign", "Impact")];
        let texts = [
            r"{\fnA}a{\fnB}b",
            r"{\fnC}c",
            r"{\rSign}d{\fnA}e",
            r"{\fnD}f",
        ];
        let events: Vec<_> = texts
            .iter()
            .cycle()
            .take(64)
            .map(|text| dialogue("Default", *text))
            .collect();
        let collector = FontCollector::new(&styles, &events);
        assert_eq!(collector.collect_parallel(), collector.collect());
    }

    #[test]
    fn collect_fonts_matches_sequential_collection() {
        let source = "[V4+ Styles]
Format: Name, Fontname
Style: Default,Verdana
Style: Sign,Impact

[Events]
Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
Dialogue: 0,0:00:00.00,0:00:01.00,Default,,0,0,0,,{\\fnGeorgia}a{\\rSign}b
Dialogue: 0,0:00:01.00,0:00:02.00,Lost,,0,0,0,,c
Dialogue: 0,0:00:02.00,0:00:03.00,Sign,,0,0,0,,{\\fnTahoma}d
";
        let script = Script::parse(source).unwrap();
        let usage = collect_fonts(&script);
        assert_eq!(usage, FontCollector::from_script(&script).collect());
        assert_eq!(
            usage.fonts.as_slice(),
            ["Georgia", "Impact", "Arial", "Tahoma", "Verdana"]
        );
        assert_eq!(usage.warnings.len(), 1);
    }
}
