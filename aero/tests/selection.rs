use aero::widgets::{SelectModifier, Selection, SelectionChange, SelectionMode};

fn keys(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn never(_: &String) -> bool {
    false
}

// =============================================================================
// Single mode
// =============================================================================

#[test]
fn test_single_click_replaces() {
    let order = keys(&["A", "B", "C"]);
    let mut selection = Selection::single();

    selection.select("A".into(), SelectModifier::None, &order, never);
    let change = selection.select("C".into(), SelectModifier::None, &order, never);

    assert_eq!(change, Some(SelectionChange::Single("C".to_string())));
    assert_eq!(selection.selected(), &["C".to_string()]);
}

#[test]
fn test_single_ignores_modifiers() {
    let order = keys(&["A", "B", "C"]);
    let mut selection = Selection::single();

    selection.select("A".into(), SelectModifier::None, &order, never);
    selection.select("B".into(), SelectModifier::Toggle, &order, never);
    selection.select("C".into(), SelectModifier::Range, &order, never);

    assert_eq!(selection.len(), 1);
    assert!(selection.is_selected(&"C".to_string()));
}

#[test]
fn test_single_with_many_keys_keeps_first() {
    let selection = Selection::single().with_selected(keys(&["B", "A"]));
    assert_eq!(selection.selected(), &["B".to_string()]);
}

// =============================================================================
// Multi mode
// =============================================================================

#[test]
fn test_multi_plain_click_replaces() {
    let order = keys(&["A", "B", "C"]);
    let mut selection = Selection::multi().with_selected(keys(&["A", "B"]));

    let change = selection.select("C".into(), SelectModifier::None, &order, never);

    assert_eq!(change, Some(SelectionChange::Multiple(keys(&["C"]))));
}

#[test]
fn test_toggle_is_an_involution() {
    let order = keys(&["A", "B", "C"]);
    let mut selection = Selection::multi().with_selected(keys(&["A"]));
    let before = selection.clone();

    selection.select("B".into(), SelectModifier::Toggle, &order, never);
    assert!(selection.is_selected(&"B".to_string()));
    selection.select("B".into(), SelectModifier::Toggle, &order, never);

    assert_eq!(selection, before);
}

#[test]
fn test_toggle_appends_in_selection_order() {
    let order = keys(&["Facebook", "Amazon", "Apple"]);
    let mut selection = Selection::multi().with_selected(keys(&["Apple"]));

    selection.select("Amazon".into(), SelectModifier::Toggle, &order, never);

    assert_eq!(selection.selected(), keys(&["Apple", "Amazon"]).as_slice());
}

#[test]
fn test_range_unions_from_anchor() {
    let order = keys(&["A", "B", "C", "D", "E"]);
    let mut selection = Selection::multi().with_selected(keys(&["B"]));

    let change = selection.select("D".into(), SelectModifier::Range, &order, never);

    assert_eq!(change, Some(SelectionChange::Multiple(keys(&["B", "C", "D"]))));
}

#[test]
fn test_range_backwards() {
    let order = keys(&["A", "B", "C", "D", "E"]);
    let mut selection = Selection::multi().with_selected(keys(&["D"]));

    selection.select("B".into(), SelectModifier::Range, &order, never);

    assert_eq!(selection.len(), 3);
    for key in ["B", "C", "D"] {
        assert!(selection.is_selected(&key.to_string()));
    }
}

#[test]
fn test_range_without_anchor_selects_target() {
    let order = keys(&["A", "B", "C"]);
    let mut selection = Selection::multi();

    selection.select("B".into(), SelectModifier::Range, &order, never);

    assert_eq!(selection.selected(), keys(&["B"]).as_slice());
}

#[test]
fn test_range_skips_disabled() {
    let order = keys(&["A", "B", "C", "D"]);
    let mut selection = Selection::multi().with_selected(keys(&["A"]));

    selection.select("D".into(), SelectModifier::Range, &order, |k| k == "C");

    assert_eq!(selection.selected(), keys(&["A", "B", "D"]).as_slice());
}

// =============================================================================
// Disabled items
// =============================================================================

#[test]
fn test_disabled_never_selected() {
    let order = keys(&["A", "B"]);
    let disabled = |k: &String| k == "B";

    for mode in [SelectionMode::Single, SelectionMode::Multi] {
        for modifier in [
            SelectModifier::None,
            SelectModifier::Toggle,
            SelectModifier::Range,
        ] {
            let mut selection = Selection::new(mode).with_selected(keys(&["A"]));
            let change = selection.select("B".into(), modifier, &order, disabled);

            assert_eq!(change, None);
            assert_eq!(selection.selected(), keys(&["A"]).as_slice());
        }
    }
}

#[test]
fn test_modifier_from_keys() {
    use aero::aerodom::Modifiers;

    assert_eq!(SelectModifier::from_modifiers(Modifiers::new()), SelectModifier::None);
    assert_eq!(SelectModifier::from_modifiers(Modifiers::ctrl()), SelectModifier::Toggle);
    assert_eq!(SelectModifier::from_modifiers(Modifiers::meta()), SelectModifier::Toggle);
    assert_eq!(SelectModifier::from_modifiers(Modifiers::shift()), SelectModifier::Range);
}
