#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn no_arguments_reads_stdin_with_defaults() {
    let cli = parse_args(Vec::<String>::new()).unwrap();
    assert_eq!(cli, CliArgs::default());
    assert_eq!(cli.file, None);
}

#[test]
fn file_and_flags_in_any_order() {
    let cli = parse_args([
        "--factory=React.createElement",
        "app.jsx",
        "--max-depth=32",
        "--color=never",
        "--strict",
    ])
    .unwrap();
    assert_eq!(cli.file, Some(PathBuf::from("app.jsx")));
    assert_eq!(cli.options.parse.factory, "React.createElement");
    assert_eq!(cli.options.parse.max_depth, 32);
    assert_eq!(cli.options.color, ColorMode::Never);
    assert!(cli.strict);
}

#[test]
fn symbol_flags() {
    let cli = parse_args(["--no-bracket-symbol"]).unwrap();
    assert_eq!(cli.options.symbols(), SymbolSet::DOT);
    let cli = parse_args(["--no-dot-symbol", "--no-bracket-symbol"]).unwrap();
    assert_eq!(cli.options.symbols(), SymbolSet::empty());
}

#[test]
fn removed_dot_flag_is_unknown() {
    assert!(parse_args(["--dot-symbol"]).is_err());
}

#[test]
fn dash_is_stdin() {
    let cli = parse_args(["-"]).unwrap();
    assert_eq!(cli.file, None);
    assert_eq!(
        parse_args(["-", "b.jsx"]).unwrap_err(),
        CliError::ExtraArgument("b.jsx".to_string())
    );
}

#[test]
fn explain_and_help() {
    let cli = parse_args(["--explain=E1003"]).unwrap();
    assert_eq!(cli.explain.as_deref(), Some("E1003"));
    assert!(parse_args(["-h"]).unwrap().help);
    assert!(parse_args(["--help"]).unwrap().help);
}

#[test]
fn rejects_bad_input() {
    assert_eq!(
        parse_args(["--fast"]).unwrap_err(),
        CliError::UnknownFlag("--fast".to_string())
    );
    assert_eq!(
        parse_args(["--max-depth=0"]).unwrap_err().to_string(),
        "invalid value `0` for `--max-depth`"
    );
    assert!(parse_args(["--max-depth=lots"]).is_err());
    assert!(parse_args(["--color=rainbow"]).is_err());
    assert!(parse_args(["--factory="]).is_err());
    assert!(matches!(
        parse_args(["a.jsx", "b.jsx"]).unwrap_err(),
        CliError::ExtraArgument(_)
    ));
}
