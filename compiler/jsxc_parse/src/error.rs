//! Parse error types.
//!
//! A [`ParseError`] is fully resolved when it is created: it carries the
//! rebuilt source line and the column of the offending token, so it stays
//! meaningful after the token list is gone.

use std::fmt;

use jsxc_diagnostic::{Diagnostic, ErrorCode, SourceLine};
use jsxc_lexer::{Span, Token, TokenKind};

/// What the parser was looking for when it failed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expected {
    /// One specific token kind.
    Kind(TokenKind),
    /// A string literal or `{` after `name=`.
    AttributeValue,
    /// `>` or `/>` after the attribute list.
    TagEnd,
    /// The closing tag of an element whose children ran out.
    ClosingTag(String),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Kind(kind) => f.write_str(kind.display_name()),
            Expected::AttributeValue => f.write_str("string literal or `{`"),
            Expected::TagEnd => f.write_str("`>` or `/>`"),
            Expected::ClosingTag(name) => write!(f, "closing tag `</{name}>`"),
        }
    }
}

/// The structural problem, independent of where it happened.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: Expected, found: TokenKind },

    #[error("expected closing tag for `{expected}`, found `</{found}>`")]
    MismatchedClosingTag {
        expected: String,
        found: String,
        /// Line of the opening tag.
        opened_line: u32,
    },

    #[error("unclosed embedded expression")]
    UnclosedExpression,

    #[error("markup nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

impl ParseErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::MismatchedClosingTag { .. } => ErrorCode::E1002,
            ParseErrorKind::UnclosedExpression => ErrorCode::E1003,
            ParseErrorKind::NestingTooDeep { .. } => ErrorCode::E1004,
        }
    }
}

/// A structural error with its location.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("line {}: {kind}", .source_line.line)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Span of the offending token.
    pub span: Span,
    /// The offending line, with the token's column.
    pub source_line: SourceLine,
}

impl ParseError {
    /// Build an error located at `tokens[index]`.
    #[cold]
    pub fn at(kind: ParseErrorKind, tokens: &[Token<'_>], index: usize) -> Self {
        ParseError {
            kind,
            span: tokens.get(index).map(|t| t.span).unwrap_or_default(),
            source_line: SourceLine::reconstruct(tokens, index),
        }
    }

    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// 1-based line of the offending token.
    #[inline]
    pub fn line(&self) -> u32 {
        self.source_line.line
    }

    /// 0-based character column of the offending token in its line.
    #[inline]
    pub fn column(&self) -> usize {
        self.source_line.column
    }

    /// Convert to a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_source_line(self.source_line.clone());

        match &self.kind {
            ParseErrorKind::MismatchedClosingTag {
                expected,
                opened_line,
                ..
            } => diag.with_note(format!("`<{expected}>` was opened on line {opened_line}")),
            ParseErrorKind::UnclosedExpression => {
                diag.with_note("no matching `}` before the end of input")
            }
            ParseErrorKind::NestingTooDeep { .. } => {
                diag.with_note("the limit can be raised with `--max-depth`")
            }
            ParseErrorKind::UnexpectedToken { .. } => diag,
        }
    }
}

#[cfg(test)]
mod tests;
