//! Recoverable conditions raised while resolving fonts
//!
//! The engine never fails on bad style references. It substitutes a default
//! and reports what happened through these values, leaving presentation to
//! the caller.

use core::fmt;

/// Style reference that could not be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum FontWarning<'a> {
    /// An event names a style that is not declared; the fallback state is used
    UnknownLineStyle {
        /// Style name as written on the event
        style: &'a str,
    },
    /// A `\r` tag names a style that is not declared; the line default is used
    UnknownResetStyle {
        /// Style name given to `\r`
        style: &'a str,
    },
}

impl FontWarning<'_> {
    /// Style name the warning is about
    #[must_use]
    pub const fn style(&self) -> &str {
        match self {
            Self::UnknownLineStyle { style } | Self::UnknownResetStyle { style } => *style,
        }
    }
}

impl fmt::Display for FontWarning<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownLineStyle { style } => {
                write!(f, "unknown style `{style}`; assuming default style")
            }
            Self::UnknownResetStyle { style } => {
                write!(f, "reset to unknown style `{style}`; using line style")
            }
        }
    }
}

/// Warning tied to the event that raised it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EventWarning<'a> {
    /// 1-based position of the event among all events of the script
    pub event: usize,
    /// Source line of the event, 0 when the event was built by hand
    pub line: usize,
    /// What went wrong
    pub warning: FontWarning<'a>,
}

impl fmt::Display for EventWarning<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line == 0 {
            write!(f, "event {}: {}", self.event, self.warning)
        } else {
            write!(
                f,
                "event {} (line {}): {}",
                self.event, self.line, self.warning
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_messages() {
        let line = FontWarning::UnknownLineStyle { style: "Foo" };
        assert_eq!(line.to_string(), "unknown style `Foo`; assuming default style");
        assert_eq!(line.style(), "Foo");

        let reset = FontWarning::UnknownResetStyle { style: "Bar" };
        assert_eq!(reset.to_string(), "reset to unknown style `Bar`; using line style");
    }

    #[test]
    fn event_warning_location() {
        let warning = FontWarning::UnknownLineStyle { style: "Foo" };
        let with_line = EventWarning {
            event: 3,
            line: 17,
            warning,
        };
        assert!(with_line.to_string().starts_with("event 3 (line 17): "));

        let without_line = EventWarning {
            event: 1,
            line: 0,
            warning,
        };
        assert!(without_line.to_string().starts_with("event 1: "));
    }
}
