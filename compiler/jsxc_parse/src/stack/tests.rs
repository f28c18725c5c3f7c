#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use super::*;
use crate::ParseConfig;

#[test]
fn deep_recursion_grows_stack() {
    fn deep_recurse(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { deep_recurse(n - 1) + 1 })
    }

    assert_eq!(deep_recurse(100_000), 100_000);
}

#[test]
fn nested_enforces_limit() {
    let config = ParseConfig {
        max_depth: 2,
        ..ParseConfig::default()
    };
    let mut parser = Parser::new("x", &config);

    let ok = parser.nested(|p| p.nested(|_| Ok(7)));
    assert_eq!(ok.unwrap(), 7);
    assert_eq!(parser.depth, 0);

    let err = parser
        .nested(|p| p.nested(|p| p.nested(|_| Ok(()))))
        .unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::NestingTooDeep { limit: 2 });
    assert_eq!(parser.depth, 0);
}
