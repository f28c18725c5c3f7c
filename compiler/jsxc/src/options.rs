//! Compile options.

use jsxc_diagnostic::ColorMode;
use jsxc_lexer::SymbolSet;
use jsxc_parse::ParseConfig;

/// Everything that can be tuned for one compile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompileOptions {
    pub parse: ParseConfig,
    /// Coloring of diagnostics written to stderr.
    pub color: ColorMode,
}

impl CompileOptions {
    /// Defaults: factory `h`, nesting limit 256, `]` and `.` as symbols,
    /// colors when stderr is a terminal.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_factory(mut self, factory: impl Into<String>) -> Self {
        self.parse.factory = factory.into();
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.parse.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_symbols(mut self, symbols: SymbolSet) -> Self {
        self.parse.lexer = self.parse.lexer.with_symbols(symbols);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    /// The optional symbols currently enabled.
    pub fn symbols(&self) -> SymbolSet {
        self.parse.lexer.symbols
    }
}

#[cfg(test)]
mod tests;
