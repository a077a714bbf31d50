//! Recoverable parse diagnostics
//!
//! A `ParseIssue` records something the parser stepped over: a skipped
//! record, a redefined style, stray content. Parsing always carries on.

use core::fmt;

/// How much a diagnostic matters, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IssueSeverity {
    /// Nothing was lost (e.g. an unrecognized line in a known section)
    Info,
    /// Input is suspicious but fully used
    Warning,
    /// A record was dropped
    Error,
}

impl IssueSeverity {
    /// Lowercase label used in messages
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Part of the script a diagnostic is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueCategory {
    /// Section layout
    Structure,
    /// Styles sections
    Style,
    /// `[Events]`
    Event,
    /// `key: value` shape of a line
    Format,
}

impl IssueCategory {
    /// Lowercase label used in messages
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Structure => "structure",
            Self::Style => "style",
            Self::Event => "event",
            Self::Format => "format",
        }
    }
}

/// Diagnostic for a line the parser recovered from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    pub severity: IssueSeverity,
    pub category: IssueCategory,
    /// What happened, phrased for the user
    pub message: String,
    /// 1-based source line
    pub line: usize,
}

impl ParseIssue {
    #[must_use]
    pub const fn new(
        severity: IssueSeverity,
        category: IssueCategory,
        message: String,
        line: usize,
    ) -> Self {
        Self {
            severity,
            category,
            message,
            line,
        }
    }

    /// Issue for a line that carried nothing usable
    #[must_use]
    pub const fn info(category: IssueCategory, message: String, line: usize) -> Self {
        Self::new(IssueSeverity::Info, category, message, line)
    }

    /// Issue for input that was used but looks wrong
    #[must_use]
    pub const fn warning(category: IssueCategory, message: String, line: usize) -> Self {
        Self::new(IssueSeverity::Warning, category, message, line)
    }

    /// Issue for a record that was dropped
    #[must_use]
    pub const fn error(category: IssueCategory, message: String, line: usize) -> Self {
        Self::new(IssueSeverity::Error, category, message, line)
    }

    /// Whether data was lost
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == IssueSeverity::Error
    }
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: {} [{}]: {}",
            self.line,
            self.severity.label(),
            self.category.label(),
            self.message
        )
    }
}
