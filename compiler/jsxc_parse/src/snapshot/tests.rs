use jsxc_lexer::TokenKind;
use pretty_assertions::assert_eq;

use crate::{ParseConfig, Parser};

#[test]
fn restore_rolls_back_cursor_and_output() {
    let config = ParseConfig::default();
    let mut parser = Parser::new("a b c", &config);
    parser.out.push_str("keep");
    let snapshot = parser.snapshot();

    parser.cursor.advance();
    parser.cursor.advance();
    parser.out.push_str(" drop");
    parser.restore(snapshot);

    assert_eq!(parser.cursor.position(), 0);
    assert_eq!(parser.out.len(), 4);
}

#[test]
fn look_ahead_does_not_consume() {
    let config = ParseConfig::default();
    let mut parser = Parser::new("< /x", &config);
    let closing = parser.look_ahead(|p| {
        p.cursor.advance();
        p.cursor.skip_spaces();
        p.cursor.check(TokenKind::ForwardSlash)
    });
    assert!(closing);
    assert!(parser.cursor.check(TokenKind::LessThan));
}

#[test]
fn snapshot_is_small() {
    assert!(std::mem::size_of::<crate::snapshot::ParserSnapshot>() <= 16);
}
