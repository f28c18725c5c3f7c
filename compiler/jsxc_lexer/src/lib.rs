//! Tokenizer for host code interleaved with tag markup.
//!
//! The tokenizer does not understand the host language. It classifies just
//! enough to let the parser tell markup apart from ordinary code: the symbol
//! characters that make up tag syntax, string literals and comments (so a
//! `<` inside them is never mistaken for markup), identifiers, whitespace,
//! and a catch-all `Code` class for everything else.
//!
//! # Guarantees
//!
//! - Tokenizing never fails. Unterminated strings and comments run to the
//!   end of input.
//! - Concatenating the `text` of every token from [`tokenize`] reproduces the
//!   source exactly, and its last token is [`TokenKind::End`]. A list rebuilt
//!   by restarting a [`Scanner`] mid-token with [`Scanner::starting_at`] no
//!   longer covers the bytes it skipped.
//!
//! ```text
//! let tokens = jsxc_lexer::tokenize("return <div/>");
//! // Name("return") Space LessThan Name("div") ForwardSlash GreaterThan End
//! ```

mod config;
mod scanner;
mod token;

pub use config::{LexerConfig, SymbolSet};
pub use scanner::Scanner;
pub use token::{Span, Token, TokenKind, TokenList};

/// Tokenize `source` with the default [`LexerConfig`].
pub fn tokenize(source: &str) -> TokenList<'_> {
    tokenize_with(source, LexerConfig::default())
}

/// Tokenize `source` with an explicit configuration.
pub fn tokenize_with(source: &str, config: LexerConfig) -> TokenList<'_> {
    TokenList::from_scanner(Scanner::new(source, config))
}
