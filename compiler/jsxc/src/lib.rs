//! jsxc: rewrite inline tag markup into factory calls.
//!
//! ```text
//! let out = jsxc::compile(r#"return <p class="x">hi</p>;"#, "h");
//! assert_eq!(out, r#"return h("p", {'class': 'x'}, 'hi');"#);
//! ```
//!
//! [`compile`] never fails: on a structural error it reports a diagnostic
//! on stderr and hands back the source unchanged. Use [`try_compile`] to get
//! the error instead.

pub mod cli;
mod options;
mod tracing_setup;

use std::io::IsTerminal;

use tracing::{error, warn};

pub use jsxc_diagnostic::{
    ColorMode, Diagnostic, DiagnosticEmitter, ErrorCode, Severity, TerminalEmitter,
};
pub use jsxc_lexer::SymbolSet;
pub use jsxc_parse::{ParseConfig, ParseError, ParseErrorKind};
pub use options::CompileOptions;
pub use tracing_setup::init_tracing;

/// Rewrite `source` with `factory` as the call target.
///
/// Returns `source` unchanged if it contains malformed markup.
pub fn compile(source: &str, factory: &str) -> String {
    compile_with(source, &CompileOptions::new().with_factory(factory))
}

/// [`compile`] with explicit options.
pub fn compile_with(source: &str, options: &CompileOptions) -> String {
    match try_compile(source, options) {
        Ok(output) => output,
        Err(err) => {
            report(&err, options.color, Severity::Warning);
            source.to_string()
        }
    }
}

/// Rewrite `source`, returning the first structural error on failure.
pub fn try_compile(source: &str, options: &CompileOptions) -> Result<String, ParseError> {
    jsxc_parse::parse(source, &options.parse)
}

/// Render `err` to stderr and the log.
///
/// Use [`Severity::Warning`] when the caller carries on with the original
/// source, [`Severity::Error`] when it gives up.
pub fn report(err: &ParseError, color: ColorMode, severity: Severity) {
    let is_tty = std::io::stderr().is_terminal();
    report_to(&mut TerminalEmitter::stderr(color, is_tty), err, severity);
}

/// [`report`] through any emitter.
pub fn report_to(emitter: &mut impl DiagnosticEmitter, err: &ParseError, severity: Severity) {
    let diagnostic = err.to_diagnostic().with_severity(severity);
    if diagnostic.is_error() {
        error!(code = %diagnostic.code, line = err.line(), column = err.column(), "{}", err.kind);
    } else {
        warn!(code = %diagnostic.code, line = err.line(), column = err.column(), "{}", err.kind);
    }
    emitter.emit(&diagnostic);
    emitter.flush();
}
