use std::sync::{Arc, Mutex};

use aero::aerodom::{Element, Event, Key, find_by_role, find_element};
use aero::widgets::ComboBox;
use aero::widgets::ComboBoxState;
use aero::widgets::combo_box::{fuzzy_filter, substring_filter};
use aero::{EventData, HandlerContext, HandlerRegistry, State, WidgetHandlers};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// =============================================================================
// Filters
// =============================================================================

#[test]
fn test_empty_query_returns_all() {
    let items = strings(&["apple", "banana"]);

    for matches in [fuzzy_filter("", &items), substring_filter("", &items)] {
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].index, 0);
        assert_eq!(matches[1].index, 1);
    }
}

#[test]
fn test_fuzzy_matching() {
    let items = strings(&["apple", "banana", "apricot"]);
    let matches = fuzzy_filter("ap", &items);
    assert_eq!(matches.len(), 2);
    let indices: Vec<usize> = matches.iter().map(|m| m.index).collect();
    assert!(indices.contains(&0)); // apple
    assert!(indices.contains(&2)); // apricot
}

#[test]
fn test_no_matches() {
    let items = strings(&["apple", "banana"]);
    assert!(fuzzy_filter("xyz", &items).is_empty());
    assert!(substring_filter("xyz", &items).is_empty());
}

#[test]
fn test_case_insensitive() {
    let items = strings(&["Apple", "BANANA"]);
    let matches = fuzzy_filter("apple", &items);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].index, 0);

    let matches = substring_filter("nan", &items);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].index, 1);
}

#[test]
fn test_substring_keeps_order_and_needs_contiguous_text() {
    let items = strings(&["Pear", "Apple", "Grape"]);

    let indices: Vec<usize> = substring_filter("ap", &items).iter().map(|m| m.index).collect();
    assert_eq!(indices, [1, 2]);

    // "pe" appears in Pear and Grape but not in Apple
    let indices: Vec<usize> = substring_filter("pe", &items).iter().map(|m| m.index).collect();
    assert_eq!(indices, [0, 2]);
}

// =============================================================================
// Widget
// =============================================================================

const FRUITS: [&str; 4] = ["Apple", "Apricot", "Banana", "Cherry"];

fn build(state: &State<ComboBoxState>, registry: &HandlerRegistry, handlers: &WidgetHandlers) -> Element {
    registry.clear();
    ComboBox::new("fruits")
        .options(FRUITS)
        .placeholder("Pick a fruit")
        .state(state)
        .build(registry, handlers)
}

fn shown_options(root: &Element) -> Vec<String> {
    find_by_role(root, "option")
        .into_iter()
        .map(|o| o.text_content())
        .collect()
}

#[test]
fn test_closed_markup() {
    let state = State::default();
    let root = build(&state, &HandlerRegistry::new(), &WidgetHandlers::new());

    assert!(root.has_class("combobox"));
    let input = find_element(&root, "fruits-input").unwrap();
    assert_eq!(input.get_attr("role"), Some("combobox"));
    assert_eq!(input.get_attr("aria-owns"), Some("fruits"));
    assert_eq!(input.get_attr("aria-expanded"), Some("false"));
    assert_eq!(input.get_attr("aria-autocomplete"), Some("list"));
    assert_eq!(input.get_attr("value"), Some(""));
    assert_eq!(input.get_attr("placeholder"), Some("Pick a fruit"));

    let toggle = find_element(&root, "fruits-toggle").unwrap();
    assert_eq!(toggle.get_attr("aria-label"), Some("Open options"));
    assert!(find_element(&root, "fruits").is_none());
}

#[test]
fn test_typing_filters_and_opens() {
    let state = State::default();
    let registry = HandlerRegistry::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let mut handlers = WidgetHandlers::new();
    handlers.insert(
        "on_change",
        Arc::new(move |hx: &HandlerContext| sink.lock().unwrap().push(hx.event().clone())),
    );
    build(&state, &registry, &handlers);

    registry.dispatch(&Event::input("fruits-input", "ap"));
    let root = build(&state, &registry, &handlers);

    assert_eq!(shown_options(&root), ["Apple", "Apricot"]);
    assert_eq!(
        find_element(&root, "fruits-toggle").unwrap().get_attr("aria-label"),
        Some("Close options")
    );
    assert_eq!(
        *seen.lock().unwrap(),
        [EventData::Change {
            text: "ap".to_string()
        }]
    );
}

#[test]
fn test_picking_option_sets_text_and_closes() {
    let state = State::default();
    let registry = HandlerRegistry::new();
    let handlers = WidgetHandlers::new();
    build(&state, &registry, &handlers);
    registry.dispatch(&Event::input("fruits-input", "an"));
    let root = build(&state, &registry, &handlers);
    assert_eq!(shown_options(&root), ["Banana"]);

    registry.dispatch(&Event::click("fruits-option-0"));
    let root = build(&state, &registry, &handlers);

    let input = find_element(&root, "fruits-input").unwrap();
    assert_eq!(input.get_attr("value"), Some("Banana"));
    assert_eq!(input.get_attr("aria-expanded"), Some("false"));
    assert!(shown_options(&root).is_empty());
}

#[test]
fn test_exact_text_marks_option_selected() {
    let state = State::default();
    let registry = HandlerRegistry::new();
    let handlers = WidgetHandlers::new();
    build(&state, &registry, &handlers);

    registry.dispatch(&Event::input("fruits-input", "Cherry"));
    let root = build(&state, &registry, &handlers);

    let option = find_element(&root, "fruits-option-0").unwrap();
    assert_eq!(option.get_attr("aria-selected"), Some("true"));
}

#[test]
fn test_no_match_hides_list_while_open() {
    let state = State::default();
    let registry = HandlerRegistry::new();
    let handlers = WidgetHandlers::new();
    build(&state, &registry, &handlers);

    registry.dispatch(&Event::input("fruits-input", "kiwi"));
    let root = build(&state, &registry, &handlers);

    assert!(state.with(|s| s.is_open()));
    assert!(find_element(&root, "fruits").is_none());
}

#[test]
fn test_toggle_escape_and_dismiss() {
    let state = State::default();
    let registry = HandlerRegistry::new();
    let handlers = WidgetHandlers::new();
    build(&state, &registry, &handlers);

    registry.dispatch(&Event::click("fruits-toggle"));
    let root = build(&state, &registry, &handlers);
    assert_eq!(shown_options(&root).len(), 4);

    registry.dispatch(&Event::key("fruits-input", Key::Escape));
    assert!(!state.with(|s| s.is_open()));

    registry.dispatch(&Event::click("fruits-toggle"));
    state.update(ComboBoxState::dismiss);
    assert!(!state.with(|s| s.is_open()));
}

#[test]
fn test_fuzzy_mode_ranks_options() {
    let state = State::default();
    let registry = HandlerRegistry::new();
    let build = |registry: &HandlerRegistry| {
        ComboBox::new("f")
            .options(FRUITS)
            .fuzzy(true)
            .state(&state)
            .build(registry, &WidgetHandlers::new())
    };
    build(&registry);

    registry.dispatch(&Event::input("f-input", "cry"));
    let root = build(&registry);

    // Not a substring of any option, but a fuzzy match for Cherry
    assert!(shown_options(&root).contains(&"Cherry".to_string()));
}
