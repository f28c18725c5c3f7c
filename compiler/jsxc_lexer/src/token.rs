//! Tokens and the token list.

use std::fmt;
use std::ops::Index;

use crate::Scanner;

/// Byte range into the source.
///
/// Layout: 8 bytes, `start` inclusive and `end` exclusive.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Whether `offset` falls strictly inside the span (not on its start).
    #[inline]
    pub const fn splits_at(self, offset: u32) -> bool {
        self.start < offset && offset < self.end
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Lexical class of a token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// `<`
    LessThan,
    /// `>`
    GreaterThan,
    /// `=`
    Equals,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `)`
    RightParen,
    /// `]`, when enabled in [`SymbolSet`](crate::SymbolSet).
    RightBracket,
    /// `.`, when enabled in [`SymbolSet`](crate::SymbolSet).
    Dot,
    /// A `/` that does not start a comment.
    ForwardSlash,
    /// Quoted literal, delimiters included.
    String,
    /// Line or block comment, markers included.
    Comment,
    /// Identifier: letters, digits, `-`, `_`, `$`; never starts with a digit.
    Name,
    /// A run of spaces, tabs, and line breaks.
    Space,
    /// Anything else, up to the next whitespace, symbol, or quote.
    Code,
    /// End of input. Always the last token, with empty text.
    End,
}

impl TokenKind {
    /// Human-readable name used in diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::LessThan => "`<`",
            TokenKind::GreaterThan => "`>`",
            TokenKind::Equals => "`=`",
            TokenKind::LeftBrace => "`{`",
            TokenKind::RightBrace => "`}`",
            TokenKind::RightParen => "`)`",
            TokenKind::RightBracket => "`]`",
            TokenKind::Dot => "`.`",
            TokenKind::ForwardSlash => "`/`",
            TokenKind::String => "string literal",
            TokenKind::Comment => "comment",
            TokenKind::Name => "name",
            TokenKind::Space => "whitespace",
            TokenKind::Code => "code",
            TokenKind::End => "end of input",
        }
    }

    /// Whitespace and comments: tokens that carry no code.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Space | TokenKind::Comment)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A classified slice of the source.
///
/// `text` is exactly `source[span.start..span.end]`. `line` is the 1-based
/// line the token starts on; line breaks inside the token only affect the
/// tokens after it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub line: u32,
    pub span: Span,
}

impl<'src> Token<'src> {
    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Body of a `String` token without its delimiters.
    ///
    /// An unterminated literal has no closing delimiter to strip.
    pub fn string_body(&self) -> &'src str {
        debug_assert!(self.kind == TokenKind::String, "not a string token");
        let Some(body) = self.text.get(1..) else {
            return "";
        };
        let delimiter = self.text.as_bytes()[0];
        let bytes = body.as_bytes();
        match bytes {
            [.., last]
                if *last == delimiter && (bytes.len() == 1 || bytes[bytes.len() - 2] != b'\\') =>
            {
                &body[..body.len() - 1]
            }
            _ => body,
        }
    }
}

/// Ordered tokens of one source.
///
/// A list built by [`from_scanner`](TokenList::from_scanner) ends with
/// [`TokenKind::End`]. A list filled with [`push`](TokenList::push) holds
/// whatever prefix has been scanned so far.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenList<'src> {
    tokens: Vec<Token<'src>>,
}

impl<'src> TokenList<'src> {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    /// Drain a scanner into a list.
    pub fn from_scanner(scanner: Scanner<'src>) -> Self {
        TokenList {
            tokens: scanner.collect(),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token<'src>) {
        self.tokens.push(token);
    }

    /// Drop every token from `len` on.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.tokens.truncate(len);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn last(&self) -> Option<&Token<'src>> {
        self.tokens.last()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token<'src>] {
        &self.tokens
    }
}

impl<'src> Index<usize> for TokenList<'src> {
    type Output = Token<'src>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl<'a, 'src> IntoIterator for &'a TokenList<'src> {
    type Item = &'a Token<'src>;
    type IntoIter = std::slice::Iter<'a, Token<'src>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
