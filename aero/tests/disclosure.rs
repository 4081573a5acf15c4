use aero::aerodom::Key;
use aero::widgets::{Disclosure, DisclosureIntent};

#[test]
fn test_unknown_node_is_closed() {
    let disclosure: Disclosure<String> = Disclosure::new();
    assert!(!disclosure.is_open(&"x".to_string()));
}

#[test]
fn test_register_keeps_existing_state() {
    let mut disclosure = Disclosure::new();
    disclosure.register("a", true);
    disclosure.toggle("a");
    disclosure.register("a", true);

    assert!(!disclosure.is_open(&"a"));
}

#[test]
fn test_toggle_flips_only_target() {
    let mut disclosure = Disclosure::new();
    disclosure.register("a", false);
    disclosure.register("b", true);

    assert!(disclosure.toggle("a"));

    assert!(disclosure.is_open(&"a"));
    assert!(disclosure.is_open(&"b"));
    assert_eq!(disclosure.open_count(), 2);
}

#[test]
fn test_pointer_opens_and_closes() {
    let mut disclosure = Disclosure::new();

    disclosure.pointer_enter(1);
    assert!(disclosure.is_open(&1));
    disclosure.pointer_leave(1);
    assert!(!disclosure.is_open(&1));
}

#[test]
fn test_keyboard_intents() {
    assert_eq!(DisclosureIntent::from_key(Key::Enter), Some(DisclosureIntent::Expand));
    assert_eq!(DisclosureIntent::from_key(Key::Right), Some(DisclosureIntent::Expand));
    assert_eq!(DisclosureIntent::from_key(Key::Escape), Some(DisclosureIntent::Collapse));
    assert_eq!(DisclosureIntent::from_key(Key::Left), Some(DisclosureIntent::Collapse));
    assert_eq!(DisclosureIntent::from_key(Key::Char('x')), None);
}

#[test]
fn test_intent_is_idempotent() {
    let mut disclosure = Disclosure::new();

    assert!(disclosure.apply_intent("m", DisclosureIntent::Expand));
    assert!(disclosure.apply_intent("m", DisclosureIntent::Expand));
    assert!(!disclosure.apply_intent("m", DisclosureIntent::Collapse));
    assert!(!disclosure.apply_intent("m", DisclosureIntent::Collapse));
}

#[test]
fn test_hover_and_keyboard_share_state() {
    let mut disclosure = Disclosure::new();

    disclosure.pointer_enter("m");
    disclosure.apply_intent("m", DisclosureIntent::Collapse);

    assert!(!disclosure.is_open(&"m"));
}
