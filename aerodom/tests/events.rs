use aerodom::{Event, Key, Modifiers, MouseButton};

#[test]
fn test_event_target() {
    assert_eq!(Event::click("btn").target(), "btn");
    assert_eq!(Event::key("menu-0", Key::Enter).target(), "menu-0");
    assert_eq!(Event::input("search", "abc").target(), "search");
    assert_eq!(
        Event::PointerEnter {
            target: "menu-1".into()
        }
        .target(),
        "menu-1"
    );
}

#[test]
fn test_click_defaults_to_left_button_without_modifiers() {
    match Event::click("row") {
        Event::Click {
            button, modifiers, ..
        } => {
            assert_eq!(button, MouseButton::Left);
            assert!(modifiers.none());
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn test_click_with_modifiers() {
    match Event::click_with("row", Modifiers::ctrl()) {
        Event::Click { modifiers, .. } => {
            assert!(modifiers.ctrl);
            assert!(!modifiers.shift);
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn test_modifiers_none() {
    assert!(Modifiers::new().none());
    assert!(!Modifiers::shift().none());
    assert!(!Modifiers::meta().none());
}

#[test]
fn test_key_from_dom() {
    assert_eq!(Key::from_dom("ArrowRight"), Some(Key::Right));
    assert_eq!(Key::from_dom("ArrowLeft"), Some(Key::Left));
    assert_eq!(Key::from_dom("Escape"), Some(Key::Escape));
    assert_eq!(Key::from_dom("Enter"), Some(Key::Enter));
    assert_eq!(Key::from_dom("a"), Some(Key::Char('a')));
    assert_eq!(Key::from_dom("F13"), None);
}
