use pretty_assertions::assert_eq;

use super::*;

#[test]
fn whitespace_only_is_dropped() {
    assert_eq!(normalize(""), None);
    assert_eq!(normalize("\n    "), None);
    assert_eq!(normalize(" \t\r\n "), None);
}

#[test]
fn trims_and_joins_lines() {
    assert_eq!(normalize("  hello\n"), Some("hello".to_string()));
    assert_eq!(normalize("a\nb"), Some("ab".to_string()));
    assert_eq!(normalize("one\r\n  two"), Some("one  two".to_string()));
}

#[test]
fn nbsp_becomes_space() {
    assert_eq!(normalize("a&nbsp;b"), Some("a b".to_string()));
    assert_eq!(normalize(" &nbsp;x "), Some(" x".to_string()));
    assert_eq!(normalize("&nbsp;"), Some(" ".to_string()));
}
