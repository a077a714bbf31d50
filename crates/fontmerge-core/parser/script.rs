//! Script container and line-driven parse loop

use super::{
    ast::{Event, EventType, ScriptInfo, Style},
    errors::{IssueCategory, ParseError, ParseIssue},
    sections::{
        events::{parse_event_line, validate_event_format},
        script_info::parse_info_field,
        styles::{parse_style_line, validate_style_format},
        FieldFormat, SectionKind,
    },
};
use crate::{utils::strip_bom, Result};

/// Parsed ASS script with zero-copy lifetime-generic design
///
/// Holds the parts of a script the font engine consumes: script info fields,
/// style definitions and events, all in document order, plus every
/// recoverable issue met while parsing. Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Script<'a> {
    /// Source text without BOM
    source: &'a str,

    /// `[Script Info]` fields
    script_info: ScriptInfo<'a>,

    /// Styles from every styles section, in document order
    styles: Vec<Style<'a>>,

    /// Events in document order
    events: Vec<Event<'a>>,

    /// Recoverable problems met while parsing
    issues: Vec<ParseIssue>,
}

impl<'a> Script<'a> {
    /// Parse ASS script from source text
    ///
    /// A leading BOM is ignored. Malformed records are skipped and reported
    /// through [`Script::issues`]; only structural problems fail.
    ///
    /// # Errors
    ///
    /// Returns an error for an unclosed section header outside attachment
    /// sections, or a `Format:` line lacking a field the font engine needs
    /// (`Name`/`Fontname` for styles, `Style`/`Text` for events).
    ///
    /// # Example
    ///
    /// ```rust
    /// use fontmerge_core::parser::Script;
    ///
    /// let script = Script::parse("[Events]\nDialogue: 0,0:00:00.00,0:00:01.00,Default,,0,0,0,,Hi")?;
    /// assert_eq!(script.events().len(), 1);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn parse(source: &'a str) -> Result<Self> {
        let (source, _) = strip_bom(source);
        let mut builder = ScriptBuilder::new(source);

        for (index, line) in source.lines().enumerate() {
            builder.feed(line, index + 1)?;
        }

        log::debug!(
            "parsed script: {} styles, {} events, {} issues",
            builder.styles.len(),
            builder.events.len(),
            builder.issues.len()
        );
        Ok(builder.finish())
    }

    /// Source text the script borrows from (BOM excluded)
    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.source
    }

    /// `[Script Info]` fields
    #[must_use]
    pub const fn script_info(&self) -> &ScriptInfo<'a> {
        &self.script_info
    }

    /// Declared `ScriptType`, if any (e.g. `v4.00+`)
    #[must_use]
    pub fn script_type(&self) -> Option<&'a str> {
        self.script_info.get("ScriptType")
    }

    /// Style definitions in document order
    #[must_use]
    pub fn styles(&self) -> &[Style<'a>] {
        &self.styles
    }

    /// Events in document order
    #[must_use]
    pub fn events(&self) -> &[Event<'a>] {
        &self.events
    }

    /// Recoverable issues met while parsing
    #[must_use]
    pub fn issues(&self) -> &[ParseIssue] {
        &self.issues
    }

    /// Find a style by exact name; a later definition shadows an earlier one
    #[must_use]
    pub fn find_style(&self, name: &str) -> Option<&Style<'a>> {
        self.styles.iter().rev().find(|style| style.name == name)
    }
}

/// Mutable parse state while walking the source line by line
struct ScriptBuilder<'a> {
    /// Source text without BOM
    source: &'a str,
    /// Section the current line belongs to (`None` before the first header)
    section: Option<SectionKind>,
    /// Header name of the current section, for diagnostics
    section_name: &'a str,
    /// Active style format
    style_format: FieldFormat<'a>,
    /// Active event format
    event_format: FieldFormat<'a>,
    /// Collected script info fields
    info: ScriptInfo<'a>,
    /// Collected styles
    styles: Vec<Style<'a>>,
    /// Collected events
    events: Vec<Event<'a>>,
    /// Collected issues
    issues: Vec<ParseIssue>,
}

impl<'a> ScriptBuilder<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            section: None,
            section_name: "",
            style_format: FieldFormat::default_styles(),
            event_format: FieldFormat::default_events(),
            info: ScriptInfo::default(),
            styles: Vec::new(),
            events: Vec::new(),
            issues: Vec::new(),
        }
    }

    /// Process one source line
    fn feed(&mut self, line: &'a str, number: usize) -> core::result::Result<(), ParseError> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(';') || trimmed.starts_with("!:") {
            return Ok(());
        }

        let in_attachments = self.section == Some(SectionKind::Other);
        if let Some(name) = section_header(trimmed) {
            // Uuencoded font and picture data may itself be bracketed
            if !in_attachments || is_section_name(name) {
                self.enter_section(name);
                return Ok(());
            }
        } else if trimmed.starts_with('[') && !in_attachments {
            return Err(ParseError::UnclosedSectionHeader { line: number });
        }

        match self.section {
            None => self.issues.push(ParseIssue::warning(
                IssueCategory::Structure,
                "content before the first section header ignored".to_string(),
                number,
            )),
            Some(SectionKind::ScriptInfo) => match parse_info_field(trimmed, number) {
                Ok(field) => self.info.fields.push(field),
                Err(issue) => self.issues.push(issue),
            },
            Some(SectionKind::Styles) => self.feed_style(trimmed, number)?,
            Some(SectionKind::Events) => self.feed_event(line.trim_start(), number)?,
            Some(SectionKind::Other) => {}
        }
        Ok(())
    }

    fn enter_section(&mut self, name: &'a str) {
        self.section = Some(SectionKind::from_header(name));
        self.section_name = name;
        // Every section starts with the standard layout until its own Format line
        self.style_format = FieldFormat::default_styles();
        self.event_format = FieldFormat::default_events();
    }

    fn feed_style(&mut self, line: &'a str, number: usize) -> core::result::Result<(), ParseError> {
        let Some((key, value)) = line.split_once(':') else {
            self.unknown_line(IssueCategory::Style, number);
            return Ok(());
        };

        match key.trim() {
            "Format" => {
                let format = FieldFormat::parse(value);
                validate_style_format(&format, number)?;
                self.style_format = format;
            }
            "Style" => match parse_style_line(value, &self.style_format, number) {
                Ok(style) => {
                    if self.styles.iter().any(|existing| existing.name == style.name) {
                        self.issues.push(ParseIssue::warning(
                            IssueCategory::Style,
                            format!("style `{}` redefined; the later definition wins", style.name),
                            number,
                        ));
                    }
                    self.styles.push(style);
                }
                Err(issue) => self.issues.push(issue),
            },
            _ => self.unknown_line(IssueCategory::Style, number),
        }
        Ok(())
    }

    fn feed_event(&mut self, line: &'a str, number: usize) -> core::result::Result<(), ParseError> {
        let Some((key, value)) = line.split_once(':') else {
            self.unknown_line(IssueCategory::Event, number);
            return Ok(());
        };

        if key.trim() == "Format" {
            let format = FieldFormat::parse(value);
            validate_event_format(&format, number)?;
            self.event_format = format;
            return Ok(());
        }

        match EventType::from_key(key) {
            Some(event_type) => {
                match parse_event_line(event_type, value, &self.event_format, number) {
                    Ok(event) => self.events.push(event),
                    Err(issue) => self.issues.push(issue),
                }
            }
            None => self.unknown_line(IssueCategory::Event, number),
        }
        Ok(())
    }

    fn unknown_line(&mut self, category: IssueCategory, number: usize) {
        self.issues.push(ParseIssue::info(
            category,
            format!("unrecognized line in [{}] skipped", self.section_name),
            number,
        ));
    }

    fn finish(self) -> Script<'a> {
        Script {
            source: self.source,
            script_info: self.info,
            styles: self.styles,
            events: self.events,
            issues: self.issues,
        }
    }
}

/// Name inside a `[...]` line
fn section_header(line: &str) -> Option<&str> {
    line.strip_prefix('[')?.strip_suffix(']')
}

/// Whether a bracketed name reads like a section title rather than data
fn is_section_name(name: &str) -> bool {
    let name = name.trim();
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '+')
}
