//! Parse error types.

use text_size::TextSize;
use thiserror::Error;

use crate::{LineCol, LineIndex, Span};

/// An error that occurred while splitting or extracting declarations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// The location in the source where the error occurred.
    pub span: Span,
}

impl ParseError {
    /// Creates a new parse error.
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Re-bases the error span onto an enclosing source, for errors raised
    /// while extracting a declaration that starts at `offset`.
    pub fn offset(self, offset: TextSize) -> Self {
        Self {
            kind: self.kind,
            span: self.span.shift(offset),
        }
    }

    /// Resolves the start of the error span to a line and column in `source`.
    pub fn line_col(&self, source: &str) -> LineCol {
        LineIndex::new(source)
            .line_col(self.span.start)
            .unwrap_or_default()
    }
}

/// The kind of parse error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The text contains no `interface` or `class` keyword.
    #[error("no interface or class declaration found")]
    NoDeclaration,

    /// A declaration keyword is not followed by a name.
    #[error("expected a name after `{keyword}`, found {found}")]
    MissingIdentifier {
        /// The declaration keyword.
        keyword: &'static str,
        /// What was found instead.
        found: String,
    },

    /// A declaration name is not followed by its body.
    #[error("expected `{{` after `{name}`, found {found}")]
    ExpectedBodyOpen {
        /// The declaration name.
        name: String,
        /// What was found instead.
        found: String,
    },

    /// A declaration body has no matching `}`.
    #[error("unclosed body of `{name}`")]
    UnclosedBody {
        /// The declaration name.
        name: String,
    },

    /// A `{` outside any declaration was never closed.
    #[error("unclosed `{{`")]
    UnclosedBrace,

    /// A `}` with no matching `{`.
    #[error("unexpected `}}`")]
    UnexpectedClosingBrace,

    /// A field statement does not start with a name.
    #[error("expected a field name, found {found}")]
    ExpectedFieldName {
        /// What was found instead.
        found: String,
    },

    /// A field name is not followed by `:`.
    #[error("expected `:` after field `{name}`")]
    MissingColon {
        /// The field name.
        name: String,
    },

    /// Nothing follows the `:` of a field.
    #[error("field `{name}` has no type")]
    MissingType {
        /// The field name.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = ParseError::new(
            ParseErrorKind::ExpectedBodyOpen {
                name: "Beans".to_string(),
                found: "'extends'".to_string(),
            },
            Span::new(16u32, 23u32),
        );
        assert_eq!(
            error.to_string(),
            "expected `{` after `Beans`, found 'extends'"
        );
    }

    #[test]
    fn test_brace_kinds_display() {
        let error = ParseError::new(ParseErrorKind::UnexpectedClosingBrace, Span::empty(0u32));
        assert_eq!(error.to_string(), "unexpected `}`");
        let error = ParseError::new(
            ParseErrorKind::UnclosedBody {
                name: "Beans".to_string(),
            },
            Span::empty(0u32),
        );
        assert_eq!(error.to_string(), "unclosed body of `Beans`");
    }

    #[test]
    fn test_offset_and_line_col() {
        let source = "interface A {}\n\ninterface B { x }";
        let error = ParseError::new(
            ParseErrorKind::MissingColon {
                name: "x".to_string(),
            },
            Span::new(14u32, 15u32),
        )
        .offset(TextSize::from(16));
        assert_eq!(error.span.slice(source), "x");
        assert_eq!(error.line_col(source), LineCol::new(2, 14));
    }
}
