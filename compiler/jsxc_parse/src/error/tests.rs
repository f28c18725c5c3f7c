use pretty_assertions::assert_eq;

use super::*;
use jsxc_lexer::tokenize;

#[test]
fn error_located_at_token() {
    let tokens = tokenize("a\n  <x>");
    let index = tokens.as_slice().iter().position(|t| t.text == "x").unwrap_or(0);
    let err = ParseError::at(
        ParseErrorKind::UnexpectedToken {
            expected: Expected::TagEnd,
            found: TokenKind::Name,
        },
        tokens.as_slice(),
        index,
    );
    assert_eq!(err.line(), 2);
    assert_eq!(err.column(), 3);
    assert_eq!(err.span, Span::new(5, 6));
    assert_eq!(err.source_line.text, "  <x>");
    assert_eq!(err.code(), ErrorCode::E1001);
}

#[test]
fn messages() {
    let unexpected = ParseErrorKind::UnexpectedToken {
        expected: Expected::Kind(TokenKind::Name),
        found: TokenKind::GreaterThan,
    };
    assert_eq!(unexpected.to_string(), "expected name, found `>`");

    let mismatch = ParseErrorKind::MismatchedClosingTag {
        expected: "div".to_string(),
        found: "span".to_string(),
        opened_line: 1,
    };
    assert_eq!(
        mismatch.to_string(),
        "expected closing tag for `div`, found `</span>`"
    );

    let closing = ParseErrorKind::UnexpectedToken {
        expected: Expected::ClosingTag("p".to_string()),
        found: TokenKind::End,
    };
    assert_eq!(
        closing.to_string(),
        "expected closing tag `</p>`, found end of input"
    );

    assert_eq!(
        ParseErrorKind::NestingTooDeep { limit: 4 }.to_string(),
        "markup nested deeper than 4 levels"
    );
}

#[test]
fn codes_per_kind() {
    assert_eq!(ParseErrorKind::UnclosedExpression.code(), ErrorCode::E1003);
    assert_eq!(
        ParseErrorKind::NestingTooDeep { limit: 1 }.code(),
        ErrorCode::E1004
    );
}

#[test]
fn diagnostic_carries_note_for_mismatch() {
    let tokens = tokenize("<div></span>");
    let err = ParseError::at(
        ParseErrorKind::MismatchedClosingTag {
            expected: "div".to_string(),
            found: "span".to_string(),
            opened_line: 1,
        },
        tokens.as_slice(),
        5,
    );
    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1002);
    assert_eq!(diag.line(), Some(1));
    assert_eq!(diag.notes, vec!["`<div>` was opened on line 1".to_string()]);
    assert_eq!(err.to_string(), "line 1: expected closing tag for `div`, found `</span>`");
}
