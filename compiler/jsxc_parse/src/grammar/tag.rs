//! Elements.

use jsxc_lexer::{SymbolSet, TokenKind};
use tracing::trace;

use crate::error::{Expected, ParseError, ParseErrorKind};
use crate::Parser;

/// Whether a tag name refers to a value in scope rather than a host element.
///
/// Host elements start with a lowercase ASCII letter. Everything else,
/// dotted paths included, is passed through as a bare reference.
fn is_component(name: &str) -> bool {
    name.contains('.') || !name.starts_with(|c: char| c.is_ascii_lowercase())
}

impl<'a> Parser<'a> {
    /// One element, written as `factory(name, attributes, children...)`.
    pub(crate) fn parse_tag(&mut self) -> Result<(), ParseError> {
        self.nested(Self::tag)
    }

    fn tag(&mut self) -> Result<(), ParseError> {
        let open = self.cursor.expect(TokenKind::LessThan)?;
        self.cursor.skip_spaces();
        let name = self.parse_tag_name()?;
        trace!(tag = name, line = open.line, "element");

        self.out.push_str(&self.config.factory);
        self.out.push('(');
        if is_component(name) {
            self.out.push_str(name);
        } else {
            self.out.push('"');
            self.out.push_str(name);
            self.out.push('"');
        }
        self.out.push_str(", ");

        self.parse_attributes()?;
        self.parse_tag_close(name, open.line)?;
        self.out.push(')');
        Ok(())
    }

    /// A name, or a dotted path of names when `.` is a symbol.
    ///
    /// The path is returned as one slice of the source, dots included.
    fn parse_tag_name(&mut self) -> Result<&'a str, ParseError> {
        let first = self.cursor.expect(TokenKind::Name)?;
        let mut end = first.span.end;
        if self.config.lexer.symbols.contains(SymbolSet::DOT) {
            while self.cursor.check(TokenKind::Dot) {
                self.cursor.advance();
                end = self.cursor.expect(TokenKind::Name)?.span.end;
            }
        }
        let source = self.cursor.source();
        Ok(&source[first.span.start as usize..end as usize])
    }

    /// `/>`, or `>` children `</name>`.
    fn parse_tag_close(&mut self, name: &str, opened_line: u32) -> Result<(), ParseError> {
        self.cursor.skip_spaces();
        match self.cursor.current_kind() {
            TokenKind::ForwardSlash => {
                self.cursor.advance();
                self.cursor.skip_spaces();
                self.cursor.expect(TokenKind::GreaterThan)?;
                return Ok(());
            }
            TokenKind::GreaterThan => {
                self.cursor.advance();
            }
            _ => return Err(self.cursor.unexpected(Expected::TagEnd)),
        }

        self.parse_children()?;

        if self.cursor.is_at_end() {
            return Err(self
                .cursor
                .unexpected(Expected::ClosingTag(name.to_string())));
        }
        self.cursor.expect(TokenKind::LessThan)?;
        self.cursor.skip_spaces();
        self.cursor.expect(TokenKind::ForwardSlash)?;
        self.cursor.skip_spaces();

        let name_index = self.cursor.position();
        let closing = self.parse_tag_name()?;
        if closing != name {
            return Err(self.cursor.error_at(
                name_index,
                ParseErrorKind::MismatchedClosingTag {
                    expected: name.to_string(),
                    found: closing.to_string(),
                    opened_line,
                },
            ));
        }

        self.cursor.skip_spaces();
        self.cursor.expect(TokenKind::GreaterThan)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
