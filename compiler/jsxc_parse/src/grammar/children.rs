//! Element children.

use jsxc_lexer::TokenKind;

use crate::error::ParseError;
use crate::text::normalize;
use crate::Parser;

impl Parser<'_> {
    /// Children up to the closing tag or the end of input.
    ///
    /// Every child is written as `, child`. Every `<` here is markup: `</`
    /// ends the children, anything else opens a child element.
    pub(crate) fn parse_children(&mut self) -> Result<(), ParseError> {
        loop {
            match self.cursor.current_kind() {
                TokenKind::End => return Ok(()),
                TokenKind::LessThan => {
                    if self.at_closing_tag() {
                        return Ok(());
                    }
                    self.out.push_str(", ");
                    self.parse_tag()?;
                }
                TokenKind::LeftBrace => {
                    self.out.push_str(", ");
                    self.parse_expression_container()?;
                }
                _ => self.parse_text(),
            }
        }
    }

    fn at_closing_tag(&mut self) -> bool {
        self.look_ahead(|p| {
            p.cursor.advance();
            p.cursor.skip_spaces();
            p.cursor.check(TokenKind::ForwardSlash)
        })
    }

    /// Raw text up to the next `{`, `<`, or the end of input.
    ///
    /// Read from the source, not from tokens, so quotes and `//` in prose
    /// mean nothing.
    fn parse_text(&mut self) {
        let source = self.cursor.source();
        let start = self.cursor.current().span.start as usize;
        let end = memchr::memchr2(b'{', b'<', &source.as_bytes()[start..])
            .map_or(source.len(), |i| start + i);

        if let Some(text) = normalize(&source[start..end]) {
            self.out.push_str(", ");
            self.out.push_quoted(&text);
        }
        self.cursor.resync(offset(end));
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "sources are limited to u32::MAX bytes, same as Span"
)]
#[inline]
fn offset(pos: usize) -> u32 {
    pos as u32
}
