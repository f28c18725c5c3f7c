//! Token cursor for navigating the token stream.
//!
//! Unlike a plain index into a fixed token list, the cursor scans on demand
//! and owns what it has scanned: children text is read at character level,
//! and when a text run ends in the middle of a token the scanner restarts
//! there (see [`Cursor::resync`]). Only the lookahead the parser asked for
//! is ever thrown away, so a resync costs the length of the split token.

use jsxc_lexer::{LexerConfig, Scanner, Token, TokenKind, TokenList};

use crate::error::{Expected, ParseError, ParseErrorKind};
use crate::heuristic::is_tag_start;

/// Cursor over the tokens of one source.
///
/// Invariant: the token at the position has been scanned, and nothing past
/// the first `End` ever is.
pub struct Cursor<'src> {
    source: &'src str,
    config: LexerConfig,
    scanner: Scanner<'src>,
    tokens: TokenList<'src>,
    pos: usize,
    /// Tokens produced by the scanner, re-scans included.
    scanned: usize,
}

impl<'src> Cursor<'src> {
    /// Start at the first token of `source`.
    pub fn new(source: &'src str, config: LexerConfig) -> Self {
        let mut cursor = Cursor {
            source,
            config,
            scanner: Scanner::new(source, config),
            tokens: TokenList::new(),
            pos: 0,
            scanned: 0,
        };
        cursor.fill_to(0);
        cursor
    }

    #[inline]
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Total tokens scanned so far, counting every re-scan.
    #[inline]
    pub fn scanned(&self) -> usize {
        self.scanned
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Set the cursor position directly.
    ///
    /// Used by snapshot restore. The position must already be scanned.
    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(
            pos < self.tokens.len(),
            "cursor position {} out of bounds (max {})",
            pos,
            self.tokens.len()
        );
        self.pos = pos;
    }

    #[inline]
    pub fn current(&self) -> Token<'src> {
        self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.tokens[self.pos].kind
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.check(TokenKind::End)
    }

    /// Consume the current token and return it. Stays put on `End`.
    #[inline]
    pub fn advance(&mut self) -> Token<'src> {
        let token = self.current();
        if !token.is(TokenKind::End) {
            self.step();
        }
        token
    }

    /// Skip one whitespace token, if present.
    #[inline]
    pub fn skip_spaces(&mut self) {
        if self.check(TokenKind::Space) {
            self.step();
        }
    }

    /// Whether the current `<` opens a tag, judged by its neighbors.
    pub fn at_tag_start(&mut self) -> bool {
        self.fill_to(self.pos + 1);
        is_tag_start(self.tokens.as_slice(), self.pos)
    }

    /// Whether every token from `start` up to the cursor is whitespace or a
    /// comment.
    pub fn only_trivia_since(&self, start: usize) -> bool {
        self.tokens.as_slice()[start..self.pos]
            .iter()
            .all(|t| t.kind.is_trivia())
    }

    /// Consume a token of the given kind, or fail with `UnexpectedToken`.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token<'src>, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(Expected::Kind(kind)))
        }
    }

    /// `UnexpectedToken` at the current token.
    #[cold]
    pub fn unexpected(&mut self, expected: Expected) -> ParseError {
        let found = self.current_kind();
        self.error_here(ParseErrorKind::UnexpectedToken { expected, found })
    }

    #[cold]
    pub fn error_here(&mut self, kind: ParseErrorKind) -> ParseError {
        self.error_at(self.pos, kind)
    }

    /// Build an error at `index`, scanning the rest of its line first so the
    /// snippet shows it whole.
    #[cold]
    pub fn error_at(&mut self, index: usize, kind: ParseErrorKind) -> ParseError {
        let line = self.tokens[index].line;
        while !self.reached_end() && self.tokens.last().is_some_and(|t| t.line <= line) {
            self.scan_one();
        }
        ParseError::at(kind, self.tokens.as_slice(), index)
    }

    /// Move to the byte `offset`, consuming every token that ends at or
    /// before it.
    ///
    /// When `offset` falls inside a token, that token and any lookahead
    /// after it are dropped and scanning restarts at `offset`, so the next
    /// token starts exactly there.
    pub fn resync(&mut self, offset: u32) {
        while !self.is_at_end() && self.current().span.end <= offset {
            self.step();
        }
        let token = self.current();
        if token.span.splits_at(offset) {
            let skipped = &self.source.as_bytes()[token.span.start as usize..offset as usize];
            let line = token.line + count_newlines(skipped);
            self.tokens.truncate(self.pos);
            self.scanner = Scanner::new(self.source, self.config).starting_at(offset, line);
            self.fill_to(self.pos);
        }
    }

    fn step(&mut self) {
        self.pos += 1;
        self.fill_to(self.pos);
    }

    /// Scan until `index` exists or the input is exhausted.
    fn fill_to(&mut self, index: usize) {
        while self.tokens.len() <= index && !self.reached_end() {
            self.scan_one();
        }
    }

    fn scan_one(&mut self) {
        self.tokens.push(self.scanner.next_token());
        self.scanned += 1;
    }

    fn reached_end(&self) -> bool {
        !self.tokens.is_empty() && self.tokens[self.tokens.len() - 1].is(TokenKind::End)
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "newline count is bounded by the token length"
)]
fn count_newlines(bytes: &[u8]) -> u32 {
    memchr::memchr_iter(b'\n', bytes).count() as u32
}

#[cfg(test)]
mod tests;
