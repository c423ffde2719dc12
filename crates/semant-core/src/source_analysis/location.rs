// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Diagnostic locations.

use super::Span;
use ecow::EcoString;
use std::fmt;

/// Where a diagnostic points.
///
/// Most diagnostics are tied to a declaration in some source file. A few
/// concern the program as a whole (for example a missing `Main` class) and
/// carry no location at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Location {
    /// No source location; the problem concerns the whole program.
    #[default]
    Global,
    /// A node in a source file.
    Source {
        /// File the node was parsed from.
        file: EcoString,
        /// Byte range of the node.
        span: Span,
    },
}

impl Location {
    /// Creates a location for a node in `file`.
    #[must_use]
    pub fn source(file: impl Into<EcoString>, span: Span) -> Self {
        Self::Source {
            file: file.into(),
            span,
        }
    }

    /// Returns the file name, if any.
    #[must_use]
    pub fn file(&self) -> Option<&str> {
        match self {
            Self::Global => None,
            Self::Source { file, .. } => Some(file.as_str()),
        }
    }

    /// Returns the span, if any.
    #[must_use]
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::Global => None,
            Self::Source { span, .. } => Some(*span),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => f.write_str("<program>"),
            Self::Source { file, span } if file.is_empty() => {
                write!(f, "<unknown>:{}", span.start())
            }
            Self::Source { file, span } => write!(f, "{file}:{}", span.start()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_location_display() {
        let loc = Location::source("good.cl", Span::new(12, 20));
        assert_eq!(loc.to_string(), "good.cl:12");
        assert_eq!(loc.file(), Some("good.cl"));
        assert_eq!(loc.span(), Some(Span::new(12, 20)));
    }

    #[test]
    fn global_location_has_no_file_or_span() {
        let loc = Location::Global;
        assert_eq!(loc.to_string(), "<program>");
        assert!(loc.file().is_none());
        assert!(loc.span().is_none());
    }

    #[test]
    fn source_location_without_file_name() {
        let loc = Location::source("", Span::new(3, 4));
        assert_eq!(loc.to_string(), "<unknown>:3");
    }
}
