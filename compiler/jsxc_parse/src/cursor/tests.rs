#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use super::*;

/// Kinds from the cursor on, `End` included. Leaves the cursor at the end.
fn rest(cursor: &mut Cursor<'_>) -> Vec<TokenKind> {
    let mut kinds = vec![cursor.current_kind()];
    while !cursor.is_at_end() {
        cursor.advance();
        kinds.push(cursor.current_kind());
    }
    kinds
}

#[test]
fn advance_stops_at_end() {
    let mut cursor = Cursor::new("a", LexerConfig::default());
    assert_eq!(cursor.advance().text, "a");
    assert!(cursor.is_at_end());
    assert_eq!(cursor.advance().kind, TokenKind::End);
    assert!(cursor.is_at_end());
}

#[test]
fn expect_reports_found_kind() {
    let mut cursor = Cursor::new("<>", LexerConfig::default());
    assert!(cursor.expect(TokenKind::LessThan).is_ok());
    let err = cursor.expect(TokenKind::Name).unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: Expected::Kind(TokenKind::Name),
            found: TokenKind::GreaterThan,
        }
    );
    assert_eq!(err.column(), 1);
    // A failed expect does not consume.
    assert!(cursor.check(TokenKind::GreaterThan));
}

#[test]
fn skip_spaces_skips_one_run() {
    let mut cursor = Cursor::new("  \n x", LexerConfig::default());
    cursor.skip_spaces();
    assert!(cursor.check(TokenKind::Name));
    cursor.skip_spaces();
    assert!(cursor.check(TokenKind::Name));
}

#[test]
fn trivia_since() {
    let mut cursor = Cursor::new(" /* c */ x", LexerConfig::default());
    cursor.advance();
    cursor.advance();
    cursor.advance();
    assert!(cursor.only_trivia_since(0));
    cursor.advance();
    assert!(!cursor.only_trivia_since(0));
}

#[test]
fn scans_on_demand() {
    let mut cursor = Cursor::new("a b c", LexerConfig::default());
    assert_eq!(cursor.scanned(), 1);
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.scanned(), 3);
    assert_eq!(rest(&mut cursor).len(), 4);
    assert_eq!(cursor.scanned(), 6);
    cursor.advance();
    assert_eq!(cursor.scanned(), 6);
}

#[test]
fn resync_on_boundary_keeps_tokens() {
    let source = "hi</p>";
    let mut cursor = Cursor::new(source, LexerConfig::default());
    cursor.resync(2);
    assert_eq!(cursor.position(), 1);
    assert!(cursor.check(TokenKind::LessThan));
    assert_eq!(cursor.scanned(), 2);
}

#[test]
fn resync_inside_token_rescans_from_offset() {
    // The apostrophe opens a string that swallows the markup after it.
    let source = "it's <b>x</b>";
    let mut cursor = Cursor::new(source, LexerConfig::default());
    cursor.advance();
    assert_eq!(cursor.current_kind(), TokenKind::String);
    cursor.set_position(0);

    cursor.resync(5);
    assert_eq!(cursor.position(), 1);
    assert_eq!(cursor.current().span.start, 5);
    assert_eq!(
        rest(&mut cursor),
        vec![
            TokenKind::LessThan,
            TokenKind::Name,
            TokenKind::GreaterThan,
            TokenKind::Name,
            TokenKind::LessThan,
            TokenKind::ForwardSlash,
            TokenKind::Name,
            TokenKind::GreaterThan,
            TokenKind::End,
        ]
    );
    // "it", the dropped string, then the nine tokens after the offset.
    assert_eq!(cursor.scanned(), 11);
}

#[test]
fn resync_drops_only_the_split_token() {
    // Every apostrophe opens a string reaching the next one, so each text
    // run splits one token. Re-scanning stays linear in the input.
    let source = "<p>don't</p>".repeat(500);
    let mut cursor = Cursor::new(&source, LexerConfig::default());
    let mut from = 0;
    while let Some(i) = source[from..].find("</p>") {
        let offset = u32::try_from(from + i).unwrap();
        cursor.resync(offset);
        assert_eq!(cursor.current().span.start, offset);
        from += i + 1;
    }
    assert!(cursor.scanned() < 10 * 500, "scanned {}", cursor.scanned());
}

#[test]
fn at_tag_start_scans_one_ahead() {
    let mut cursor = Cursor::new("<div", LexerConfig::default());
    assert_eq!(cursor.scanned(), 1);
    assert!(cursor.at_tag_start());
    assert_eq!(cursor.scanned(), 2);
}

#[test]
fn error_scans_the_rest_of_the_line() {
    let mut cursor = Cursor::new("<a x=>b\nnext", LexerConfig::default());
    for _ in 0..4 {
        cursor.advance();
    }
    let err = cursor.error_here(ParseErrorKind::UnclosedExpression);
    assert_eq!(err.line(), 1);
    assert_eq!(err.source_line.text, "<a x=>b");
}

#[test]
fn resync_tracks_lines_inside_token() {
    let source = "a `x\ny\n<b/>";
    let mut cursor = Cursor::new(source, LexerConfig::default());
    let offset = u32::try_from(source.find('<').unwrap()).unwrap();
    cursor.resync(offset);
    assert_eq!(cursor.current().text, "<");
    assert_eq!(cursor.current().line, 3);
}

#[test]
fn resync_to_end_of_input() {
    let source = "abc";
    let mut cursor = Cursor::new(source, LexerConfig::default());
    cursor.resync(3);
    assert!(cursor.is_at_end());
}
