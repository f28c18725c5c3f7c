use pretty_assertions::assert_eq;

use super::*;

#[test]
fn defaults() {
    let options = CompileOptions::new();
    assert_eq!(options.parse.factory, "h");
    assert_eq!(options.parse.max_depth, jsxc_parse::DEFAULT_MAX_DEPTH);
    assert_eq!(options.symbols(), SymbolSet::RIGHT_BRACKET | SymbolSet::DOT);
    assert_eq!(options.color, ColorMode::Auto);
}

#[test]
fn builder_overrides() {
    let options = CompileOptions::new()
        .with_factory("React.createElement")
        .with_max_depth(8)
        .with_symbols(SymbolSet::DOT)
        .with_color(ColorMode::Never);
    assert_eq!(options.parse.factory, "React.createElement");
    assert_eq!(options.parse.max_depth, 8);
    assert_eq!(options.symbols(), SymbolSet::DOT);
    assert_eq!(options.color, ColorMode::Never);
}
