//! Host code and embedded expressions.

use jsxc_lexer::TokenKind;

use crate::error::{ParseError, ParseErrorKind};
use crate::Parser;

impl Parser<'_> {
    /// Copy host code through, rewriting every tag found on the way.
    ///
    /// With `open` set (the index of an opening `{`), stops in front of the
    /// matching `}` and treats the end of input as an error. Without it,
    /// runs to the end of input and unbalanced braces are plain code.
    pub(crate) fn parse_body(&mut self, open: Option<usize>) -> Result<(), ParseError> {
        let mut depth = 0usize;
        loop {
            match self.cursor.current_kind() {
                TokenKind::End => {
                    return match open {
                        Some(index) => Err(self
                            .cursor
                            .error_at(index, ParseErrorKind::UnclosedExpression)),
                        None => Ok(()),
                    };
                }
                TokenKind::LessThan if self.cursor.at_tag_start() => {
                    self.parse_tag()?;
                    continue;
                }
                TokenKind::LeftBrace => depth += 1,
                TokenKind::RightBrace if depth == 0 && open.is_some() => return Ok(()),
                TokenKind::RightBrace => depth = depth.saturating_sub(1),
                _ => {}
            }
            let token = self.cursor.advance();
            self.out.push_str(token.text);
        }
    }

    /// `{ ... }`, written as `( ... )`.
    ///
    /// A container holding only whitespace and comments becomes
    /// `(undefined)`.
    pub(crate) fn parse_expression_container(&mut self) -> Result<(), ParseError> {
        self.nested(Self::expression_container)
    }

    fn expression_container(&mut self) -> Result<(), ParseError> {
        let open = self.cursor.position();
        self.cursor.expect(TokenKind::LeftBrace)?;
        self.out.push('(');

        let start = self.snapshot();
        self.parse_body(Some(open))?;
        if self.cursor.only_trivia_since(start.cursor_pos) {
            self.out.truncate(start.output_len);
            self.out.push_str("undefined");
        }

        self.cursor.expect(TokenKind::RightBrace)?;
        self.out.push(')');
        Ok(())
    }
}
