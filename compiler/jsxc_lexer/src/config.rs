//! Lexer configuration.

use bitflags::bitflags;

use crate::TokenKind;

bitflags! {
    /// Optional single-character symbols.
    ///
    /// `< > = { } ) /` are always symbols. The characters in this set are
    /// symbols only when enabled; otherwise they are absorbed into `Code`.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct SymbolSet: u8 {
        /// `]` yields [`TokenKind::RightBracket`].
        const RIGHT_BRACKET = 1 << 0;
        /// `.` yields [`TokenKind::Dot`], enabling dotted tag names.
        const DOT = 1 << 1;
    }
}

/// Tokenizer settings shared by every scan of one compile.
///
/// Both optional symbols are on by default.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LexerConfig {
    pub symbols: SymbolSet,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            symbols: SymbolSet::RIGHT_BRACKET | SymbolSet::DOT,
        }
    }
}

impl LexerConfig {
    /// Replace the optional symbol set.
    #[must_use]
    pub fn with_symbols(mut self, symbols: SymbolSet) -> Self {
        self.symbols = symbols;
        self
    }

    /// The token kind `byte` produces on its own, if it is a symbol.
    #[inline]
    pub fn symbol_kind(&self, byte: u8) -> Option<TokenKind> {
        match byte {
            b'<' => Some(TokenKind::LessThan),
            b'>' => Some(TokenKind::GreaterThan),
            b'=' => Some(TokenKind::Equals),
            b'{' => Some(TokenKind::LeftBrace),
            b'}' => Some(TokenKind::RightBrace),
            b')' => Some(TokenKind::RightParen),
            b']' if self.symbols.contains(SymbolSet::RIGHT_BRACKET) => {
                Some(TokenKind::RightBracket)
            }
            b'.' if self.symbols.contains(SymbolSet::DOT) => Some(TokenKind::Dot),
            _ => None,
        }
    }

    /// Whether `byte` is a symbol under this configuration.
    #[inline]
    pub fn is_symbol(&self, byte: u8) -> bool {
        self.symbol_kind(byte).is_some()
    }
}
