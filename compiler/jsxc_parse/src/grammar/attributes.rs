//! Attribute lists.

use jsxc_lexer::TokenKind;

use crate::error::{Expected, ParseError};
use crate::Parser;

impl Parser<'_> {
    /// `null`, or `{'key': value, ...}` for `key`, `key="v"`, `key={expr}`.
    pub(crate) fn parse_attributes(&mut self) -> Result<(), ParseError> {
        self.cursor.skip_spaces();
        if !self.cursor.check(TokenKind::Name) {
            self.out.push_str("null");
            return Ok(());
        }

        self.out.push('{');
        let mut first = true;
        while self.cursor.check(TokenKind::Name) {
            let key = self.cursor.advance();
            if !first {
                self.out.push_str(", ");
            }
            first = false;
            self.out.push('\'');
            self.out.push_str(key.text);
            self.out.push_str("': ");

            self.cursor.skip_spaces();
            if self.cursor.check(TokenKind::Equals) {
                self.cursor.advance();
                self.cursor.skip_spaces();
                self.parse_attribute_value()?;
                self.cursor.skip_spaces();
            } else {
                // Bare attribute.
                self.out.push_str("true");
            }
        }
        self.out.push('}');
        Ok(())
    }

    fn parse_attribute_value(&mut self) -> Result<(), ParseError> {
        match self.cursor.current_kind() {
            TokenKind::String => {
                let value = self.cursor.advance();
                self.out.push_quoted(value.string_body());
                Ok(())
            }
            TokenKind::LeftBrace => self.parse_expression_container(),
            _ => Err(self.cursor.unexpected(Expected::AttributeValue)),
        }
    }
}
