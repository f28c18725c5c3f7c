use super::is_component;

#[test]
fn host_elements_are_lowercase() {
    assert!(!is_component("div"));
    assert!(!is_component("my-widget"));
    assert!(!is_component("h1"));
}

#[test]
fn components() {
    assert!(is_component("Card"));
    assert!(is_component("_private"));
    assert!(is_component("$slot"));
    assert!(is_component("ui.button"));
}
