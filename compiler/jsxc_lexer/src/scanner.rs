//! Hand-written single-pass scanner.
//!
//! Produces one [`Token`] per call, never re-reading bytes it has already
//! classified. Dispatch happens on the first byte of each token, in this
//! priority order:
//!
//! 1. symbol characters (see [`LexerConfig::symbol_kind`])
//! 2. `"`, `'`, `` ` ``: string literal
//! 3. `/`: line comment, block comment, or a lone slash
//! 4. ASCII letter or `-_$`: name
//! 5. space, tab, `\r`, `\n`: whitespace run
//! 6. anything else: code run
//!
//! All token boundaries fall on ASCII bytes, so every token text is a valid
//! `&str` slice of the source even when the source contains multi-byte
//! characters.

use crate::{LexerConfig, Span, Token, TokenKind};

#[inline]
fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

#[inline]
fn is_quote(byte: u8) -> bool {
    matches!(byte, b'"' | b'\'' | b'`')
}

#[inline]
fn is_name_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || matches!(byte, b'-' | b'_' | b'$')
}

#[inline]
fn is_name_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'$')
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "sources are limited to u32::MAX bytes, same as Span"
)]
#[inline]
fn offset(pos: usize) -> u32 {
    pos as u32
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "newline count is bounded by the token length"
)]
fn count_newlines(bytes: &[u8]) -> u32 {
    memchr::memchr_iter(b'\n', bytes).count() as u32
}

/// Scanner over one source string.
///
/// Iterating yields every token followed by exactly one `End` token.
pub struct Scanner<'src> {
    source: &'src str,
    pos: usize,
    /// Line of the next token to be produced.
    line: u32,
    config: LexerConfig,
    finished: bool,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str, config: LexerConfig) -> Self {
        debug_assert!(
            u32::try_from(source.len()).is_ok(),
            "source exceeds u32::MAX bytes"
        );
        Scanner {
            source,
            pos: 0,
            line: 1,
            config,
            finished: false,
        }
    }

    /// Resume scanning at byte `offset`, which lies on line `line`.
    ///
    /// `offset` must be on a character boundary.
    #[must_use]
    pub fn starting_at(mut self, offset: u32, line: u32) -> Self {
        debug_assert!(self.source.is_char_boundary(offset as usize));
        self.pos = offset as usize;
        self.line = line;
        self.finished = false;
        self
    }

    /// Produce the next token. Returns `End` once the source is exhausted,
    /// and keeps returning it on further calls.
    pub fn next_token(&mut self) -> Token<'src> {
        let bytes = self.source.as_bytes();
        let start = self.pos;
        let Some(&first) = bytes.get(start) else {
            return Token {
                kind: TokenKind::End,
                text: "",
                line: self.line,
                span: Span::new(offset(start), offset(start)),
            };
        };

        let kind = if let Some(kind) = self.config.symbol_kind(first) {
            self.pos += 1;
            kind
        } else if is_quote(first) {
            self.string(first)
        } else if first == b'/' {
            self.slash()
        } else if is_name_start(first) {
            self.name()
        } else if is_space(first) {
            self.space()
        } else {
            self.code()
        };

        let token = Token {
            kind,
            text: &self.source[start..self.pos],
            line: self.line,
            span: Span::new(offset(start), offset(self.pos)),
        };
        // Line breaks inside a token count from the next token on.
        if matches!(
            kind,
            TokenKind::String | TokenKind::Comment | TokenKind::Space
        ) {
            self.line += count_newlines(token.text.as_bytes());
        }
        token
    }

    /// Literal up to the next unescaped `delimiter`, or to end of input.
    ///
    /// Only the delimiter can be escaped, and only by the byte right
    /// before it; no other escape processing happens.
    fn string(&mut self, delimiter: u8) -> TokenKind {
        let bytes = self.source.as_bytes();
        self.pos += 1;
        loop {
            match memchr::memchr(delimiter, &bytes[self.pos..]) {
                Some(found) => {
                    let at = self.pos + found;
                    self.pos = at + 1;
                    if bytes[at - 1] != b'\\' {
                        break;
                    }
                }
                None => {
                    self.pos = bytes.len();
                    break;
                }
            }
        }
        TokenKind::String
    }

    fn slash(&mut self) -> TokenKind {
        let bytes = self.source.as_bytes();
        match bytes.get(self.pos + 1) {
            Some(b'/') => {
                // The line break stays outside the comment.
                let body = &bytes[self.pos + 2..];
                self.pos = match memchr::memchr(b'\n', body) {
                    Some(found) => self.pos + 2 + found,
                    None => bytes.len(),
                };
                TokenKind::Comment
            }
            Some(b'*') => {
                let body = &bytes[self.pos + 2..];
                self.pos = match memchr::memmem::find(body, b"*/") {
                    Some(found) => self.pos + 2 + found + 2,
                    None => bytes.len(),
                };
                TokenKind::Comment
            }
            _ => {
                self.pos += 1;
                TokenKind::ForwardSlash
            }
        }
    }

    fn name(&mut self) -> TokenKind {
        self.pos += 1;
        self.eat_while(is_name_continue);
        TokenKind::Name
    }

    fn space(&mut self) -> TokenKind {
        self.eat_while(is_space);
        TokenKind::Space
    }

    fn code(&mut self) -> TokenKind {
        let config = self.config;
        self.pos += 1;
        self.eat_while(|b| !(is_space(b) || is_quote(b) || config.is_symbol(b)));
        TokenKind::Code
    }

    #[inline]
    fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        let bytes = self.source.as_bytes();
        while self.pos < bytes.len() && pred(bytes[self.pos]) {
            self.pos += 1;
        }
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::End {
            self.finished = true;
        }
        Some(token)
    }
}
