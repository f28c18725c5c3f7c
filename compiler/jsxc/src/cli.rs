//! Command-line arguments.
//!
//! Flags use the `--name=value` form; anything not starting with `-` is the
//! input file. `-` reads stdin explicitly.

use std::path::PathBuf;

use jsxc_diagnostic::ColorMode;
use jsxc_lexer::SymbolSet;

use crate::CompileOptions;

/// Parsed command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// Input file; stdin when `None`.
    pub file: Option<PathBuf>,
    pub options: CompileOptions,
    /// Fail with a non-zero status instead of echoing the input.
    pub strict: bool,
    /// Error code to describe instead of compiling.
    pub explain: Option<String>,
    pub help: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CliError {
    #[error("unknown option `{0}`")]
    UnknownFlag(String),
    #[error("invalid value `{value}` for `{flag}`")]
    InvalidValue { flag: &'static str, value: String },
    #[error("unexpected argument `{0}`, only one input file is accepted")]
    ExtraArgument(String),
}

/// Parse arguments, program name excluded.
pub fn parse_args<I, S>(args: I) -> Result<CliArgs, CliError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cli = CliArgs::default();
    let mut seen_file = false;

    for arg in args {
        let arg = arg.as_ref();
        if let Some(name) = arg.strip_prefix("--factory=") {
            if name.is_empty() {
                return Err(invalid("--factory", name));
            }
            cli.options.parse.factory = name.to_string();
        } else if let Some(n) = arg.strip_prefix("--max-depth=") {
            match n.parse::<usize>() {
                Ok(depth) if depth > 0 => cli.options.parse.max_depth = depth,
                _ => return Err(invalid("--max-depth", n)),
            }
        } else if let Some(mode) = arg.strip_prefix("--color=") {
            cli.options.color = ColorMode::from_flag(mode).ok_or_else(|| invalid("--color", mode))?;
        } else if let Some(code) = arg.strip_prefix("--explain=") {
            cli.explain = Some(code.to_string());
        } else if arg == "--no-dot-symbol" {
            cli.options.parse.lexer.symbols.remove(SymbolSet::DOT);
        } else if arg == "--no-bracket-symbol" {
            cli.options.parse.lexer.symbols.remove(SymbolSet::RIGHT_BRACKET);
        } else if arg == "--strict" {
            cli.strict = true;
        } else if arg == "--help" || arg == "-h" {
            cli.help = true;
        } else if arg == "-" || !arg.starts_with('-') {
            if seen_file {
                return Err(CliError::ExtraArgument(arg.to_string()));
            }
            seen_file = true;
            if arg != "-" {
                cli.file = Some(PathBuf::from(arg));
            }
        } else {
            return Err(CliError::UnknownFlag(arg.to_string()));
        }
    }

    Ok(cli)
}

fn invalid(flag: &'static str, value: &str) -> CliError {
    CliError::InvalidValue {
        flag,
        value: value.to_string(),
    }
}

/// Usage text for `--help` and argument errors.
pub const USAGE: &str = "\
Usage: jsxc [FILE] [options]

Rewrites tag markup in FILE (or stdin) into factory calls on stdout.

Options:
  --factory=NAME       Call target for every tag (default: h)
  --max-depth=N        Deepest allowed nesting (default: 256)
  --color=WHEN         Diagnostic colors: auto, always, never
  --no-dot-symbol      Treat `.` as plain code (no <ui.Button/> names)
  --no-bracket-symbol  Treat `]` as plain code
  --strict             Exit with status 1 on malformed markup
  --explain=CODE       Describe an error code, e.g. E1002
  -h, --help           Show this help";

#[cfg(test)]
mod tests;
