//! Recursive descent transform from markup-in-host-code to factory calls.
//!
//! There is no AST. The parser walks the token list once and writes the
//! result as it goes: host code is copied through token by token, and every
//! tag the [heuristic](is_tag_start) accepts is replaced with a call
//!
//! ```text
//! <Card title="x">hi {name}</Card>   =>   h(Card, {'title': 'x'}, 'hi', (name))
//! ```
//!
//! Errors abort the whole transform. Productions return
//! `Result<(), ParseError>` and bail out with `?`, so a caller either gets
//! the complete rewrite or the first structural error, never a partial
//! rewrite.

mod cursor;
mod error;
mod grammar;
mod heuristic;
mod output;
mod snapshot;
mod stack;
mod text;

pub use cursor::Cursor;
pub use error::{Expected, ParseError, ParseErrorKind};
pub use heuristic::is_tag_start;

use jsxc_lexer::LexerConfig;
use output::OutputBuffer;
use tracing::debug;

/// Default bound on combined tag and expression nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Settings for one transform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseConfig {
    /// Call target written for every tag, copied verbatim.
    pub factory: String,
    /// Deepest allowed nesting of tags and `{...}` expressions.
    pub max_depth: usize,
    pub lexer: LexerConfig,
}

impl Default for ParseConfig {
    fn default() -> Self {
        ParseConfig {
            factory: "h".to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            lexer: LexerConfig::default(),
        }
    }
}

impl ParseConfig {
    /// Default settings with the given factory name.
    pub fn new(factory: impl Into<String>) -> Self {
        ParseConfig {
            factory: factory.into(),
            ..ParseConfig::default()
        }
    }
}

/// Parser state for one source.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    config: &'a ParseConfig,
    out: OutputBuffer,
    /// Current tag plus expression nesting.
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Position the parser at the first token of `source`.
    pub fn new(source: &'a str, config: &'a ParseConfig) -> Self {
        Parser {
            cursor: Cursor::new(source, config.lexer),
            config,
            out: OutputBuffer::with_capacity(source.len()),
            depth: 0,
        }
    }

    /// Run the transform over the whole source.
    pub fn parse_program(mut self) -> Result<String, ParseError> {
        self.parse_body(None)?;
        debug!(
            tokens = self.cursor.scanned(),
            output_bytes = self.out.len(),
            "transformed"
        );
        Ok(self.out.into_string())
    }
}

/// Rewrite every recognized tag in `source` into a factory call.
///
/// Returns the first structural error instead of a partial rewrite.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(bytes = source.len(), factory = %config.factory)
)]
pub fn parse(source: &str, config: &ParseConfig) -> Result<String, ParseError> {
    Parser::new(source, config).parse_program()
}

#[cfg(test)]
mod tests;
