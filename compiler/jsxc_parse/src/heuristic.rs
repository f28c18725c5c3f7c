//! Tag-start detection.
//!
//! The host language is never parsed, so whether a `<` opens markup or is
//! an operator is decided from its neighbours alone. This is the only place
//! that decision is made.

use jsxc_lexer::{Token, TokenKind};
use tracing::trace;

/// Whether the `<` at `tokens[pos]` opens a tag.
///
/// A `<` is a tag start when both hold:
///
/// - the token right after it is a name, with no whitespace between;
/// - the nearest non-whitespace token before it is not an operand end:
///   a name other than `return`, `)`, `]`, `}`, or a code run whose last
///   character could end an identifier or a number (`10`, `.b`).
///
/// `a < b`, `f() < g`, `xs[i] < n`, `a.b<c`, `10<x` and `x <= y` stay
/// comparisons.
/// `return <div/>`, `= <div/>`, `(<div/>` and a `<` at the very start of the
/// input are markup.
pub fn is_tag_start(tokens: &[Token<'_>], pos: usize) -> bool {
    debug_assert!(
        tokens.get(pos).is_some_and(|t| t.is(TokenKind::LessThan)),
        "is_tag_start called off a `<`"
    );

    if !tokens.get(pos + 1).is_some_and(|t| t.is(TokenKind::Name)) {
        trace!(pos, "`<` not followed by a name");
        return false;
    }

    let Some(prev) = previous_significant(tokens, pos) else {
        return true;
    };
    let operand_end = match prev.kind {
        TokenKind::Name => prev.text != "return",
        TokenKind::RightParen | TokenKind::RightBracket | TokenKind::RightBrace => true,
        TokenKind::Code => prev
            .text
            .chars()
            .next_back()
            .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '$'),
        _ => false,
    };
    if operand_end {
        trace!(pos, after = prev.text, "`<` follows an operand");
    }
    !operand_end
}

/// The token before `pos`, looking past one whitespace run.
fn previous_significant<'a, 'src>(
    tokens: &'a [Token<'src>],
    pos: usize,
) -> Option<&'a Token<'src>> {
    let prev = tokens.get(pos.checked_sub(1)?)?;
    if prev.is(TokenKind::Space) {
        tokens.get(pos.checked_sub(2)?)
    } else {
        Some(prev)
    }
}
