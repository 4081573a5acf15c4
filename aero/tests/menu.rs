use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use aero::aerodom::{Element, Event, Key, find_by_role, find_element, to_html};
use aero::widgets::{Disclosure, Menu, MenuBar, MenuBarItem, MenuItem, MenuState, Shortcut};
use aero::{EventData, HandlerContext, HandlerRegistry, State, WidgetHandlers};

fn view_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::link("Open").href("#open").icon("open.png"),
        MenuItem::radio("view", "list", "List"),
        MenuItem::radio("view", "icons", "Icons").divider(),
        MenuItem::checkbox("Status bar").default_checked(true),
        MenuItem::submenu(
            "Sort by",
            vec![MenuItem::link("Name"), MenuItem::link("Date")],
        ),
        MenuItem::link("Print").disabled(),
    ]
}

fn build(state: &State<MenuState>, registry: &HandlerRegistry) -> Element {
    Menu::new()
        .id("m")
        .items(view_menu())
        .can_hover(true)
        .width_px(200)
        .state(state)
        .build(registry, &WidgetHandlers::new())
}

fn pointer_enter(target: &str) -> Event {
    Event::PointerEnter {
        target: target.to_string(),
    }
}

fn pointer_leave(target: &str) -> Event {
    Event::PointerLeave {
        target: target.to_string(),
    }
}

// =============================================================================
// Menu markup
// =============================================================================

#[test]
fn test_menu_root() {
    let state = State::default();
    let root = build(&state, &HandlerRegistry::new());

    assert_eq!(root.get_attr("role"), Some("menu"));
    assert!(root.has_class("can-hover"));
    assert_eq!(root.style.get("width"), Some("200px"));
    assert_eq!(find_by_role(&root, "menuitem").len(), 6);
}

#[test]
fn test_item_attributes() {
    let state = State::default();
    let root = build(&state, &HandlerRegistry::new());
    let html = to_html(&root);

    assert!(html.contains(
        r#"<li id="m-item-2" class="has-divider" role="menuitem" tabindex="0" aria-haspopup="false">"#
    ));
    assert!(html.contains(r#"aria-haspopup="true">Sort by</li>"#));
    assert!(html.contains(
        r#"<li id="m-item-5" role="menuitem" tabindex="0" aria-haspopup="false" aria-disabled="true">Print</li>"#
    ));
}

#[test]
fn test_link_with_icon() {
    let state = State::default();
    let root = build(&state, &HandlerRegistry::new());
    let open = find_element(&root, "m-item-0").unwrap();

    assert_eq!(
        aero::aerodom::render::inner_html(open),
        r##"<img src="open.png" alt="" width="18" height="18"><a href="#open">Open</a>"##
    );
}

// =============================================================================
// Radio and checkbox items
// =============================================================================

#[test]
fn test_radio_group_checks_one() {
    let state = State::default();
    let registry = HandlerRegistry::new();
    build(&state, &registry);

    assert!(registry.dispatch(&Event::click("view-icons")));
    let root = build(&state, &registry);
    assert!(find_element(&root, "view-icons").unwrap().has_flag("checked"));
    assert!(!find_element(&root, "view-list").unwrap().has_flag("checked"));

    registry.dispatch(&Event::click("view-list"));
    let root = build(&state, &registry);
    assert!(!find_element(&root, "view-icons").unwrap().has_flag("checked"));
    assert_eq!(state.with(|s| s.radio_value("view").map(String::from)), Some("list".to_string()));
}

#[test]
fn test_radio_calls_item_handler() {
    let state = State::default();
    let registry = HandlerRegistry::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    Menu::new()
        .item(MenuItem::radio("size", "large", "Large").on_change(Arc::new(
            move |hx: &HandlerContext| sink.lock().unwrap().push(hx.event().clone()),
        )))
        .state(&state)
        .build(&registry, &WidgetHandlers::new());

    registry.dispatch(&Event::click("size-large"));

    assert_eq!(
        *seen.lock().unwrap(),
        [EventData::Change {
            text: "large".to_string()
        }]
    );
}

#[test]
fn test_checkbox_item_toggles() {
    let state = State::default();
    let registry = HandlerRegistry::new();
    let root = build(&state, &registry);
    assert!(find_element(&root, "checkbox-status-bar").unwrap().has_flag("checked"));

    registry.dispatch(&Event::click("checkbox-status-bar"));
    let root = build(&state, &registry);

    assert!(!find_element(&root, "checkbox-status-bar").unwrap().has_flag("checked"));
}

#[test]
fn test_checkbox_item_clicked_twice() {
    let state = State::default();
    let registry = HandlerRegistry::new();
    build(&state, &registry);

    registry.dispatch(&Event::click("checkbox-status-bar"));
    registry.dispatch(&Event::click("checkbox-status-bar"));
    let root = build(&state, &registry);

    assert!(find_element(&root, "checkbox-status-bar").unwrap().has_flag("checked"));
}

#[test]
fn test_disabled_link_has_no_handler() {
    let state = State::default();
    let registry = HandlerRegistry::new();
    let clicks = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&clicks);
    Menu::new()
        .id("d")
        .item(
            MenuItem::link("Print")
                .on_click(Arc::new(move |_: &HandlerContext| {
                    counter.fetch_add(1, Ordering::SeqCst);
                }))
                .disabled(),
        )
        .state(&state)
        .build(&registry, &WidgetHandlers::new());

    assert!(!registry.dispatch(&Event::click("d-item-0")));
    assert_eq!(clicks.load(Ordering::SeqCst), 0);
}

// =============================================================================
// Submenus
// =============================================================================

#[test]
fn test_submenu_opens_on_hover() {
    let state = State::default();
    let registry = HandlerRegistry::new();
    let root = build(&state, &registry);
    assert!(find_element(&root, "m-item-4-0").is_none());

    registry.dispatch(&pointer_enter("m-item-4"));
    let root = build(&state, &registry);
    let sort_by = find_element(&root, "m-item-4").unwrap();
    let nested = &sort_by.child_elements()[1];
    assert_eq!(nested.get_attr("role"), Some("menu"));
    assert_eq!(
        nested.style.to_inline(),
        "position: absolute; left: 100%; top: 0"
    );
    assert!(find_element(&root, "m-item-4-1").is_some());

    registry.dispatch(&pointer_leave("m-item-4"));
    let root = build(&state, &registry);
    assert!(find_element(&root, "m-item-4-0").is_none());
}

#[test]
fn test_submenu_keyboard() {
    let state = State::default();
    let registry = HandlerRegistry::new();
    build(&state, &registry);

    registry.dispatch(&Event::key("m-item-4", Key::Right));
    assert!(state.with(|s| s.submenus.is_open(&"4".to_string())));

    registry.dispatch(&Event::key("m-item-4", Key::Char('a')));
    assert!(state.with(|s| s.submenus.is_open(&"4".to_string())));

    registry.dispatch(&Event::key("m-item-4", Key::Escape));
    assert!(!state.with(|s| s.submenus.is_open(&"4".to_string())));
}

// =============================================================================
// MenuBar
// =============================================================================

fn bar_items(on_exit: aero::Handler) -> Vec<MenuBarItem> {
    vec![
        MenuBarItem::new("File").items(vec![
            MenuBarItem::new("Save")
                .href("#save")
                .shortcut(Shortcut::new("S").ctrl()),
            MenuBarItem::new("Exit").on_click(on_exit).divider(),
        ]),
        MenuBarItem::new("Help"),
    ]
}

fn build_bar(
    state: &State<Disclosure<String>>,
    registry: &HandlerRegistry,
    on_exit: aero::Handler,
) -> Element {
    MenuBar::new()
        .id("bar")
        .items(bar_items(on_exit))
        .state(state)
        .build(registry, &WidgetHandlers::new())
}

#[test]
fn test_shortcut_text() {
    assert_eq!(Shortcut::new("S").ctrl().to_string(), "Ctrl+S");
    assert_eq!(
        Shortcut::new("Z").ctrl().shift().alt().to_string(),
        "Ctrl+Shift+Alt+Z"
    );
    assert_eq!(Shortcut::new("F1").to_string(), "F1");
}

#[test]
fn test_menubar_markup() {
    let state = State::default();
    let root = build_bar(&state, &HandlerRegistry::new(), Arc::new(|_: &HandlerContext| {}));

    assert_eq!(root.get_attr("role"), Some("menubar"));
    assert!(!root.has_class("can-hover"));
    assert_eq!(
        to_html(&root),
        concat!(
            r#"<ul id="bar" role="menubar">"#,
            r#"<li id="bar-item-0" role="menuitem" tabindex="0" aria-haspopup="true">File</li>"#,
            r#"<li id="bar-item-1" role="menuitem" tabindex="0" aria-haspopup="false">Help</li>"#,
            "</ul>"
        )
    );
}

#[test]
fn test_menubar_opens_and_runs_items() {
    let state = State::default();
    let registry = HandlerRegistry::new();
    let exits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&exits);
    let on_exit: aero::Handler = Arc::new(move |_: &HandlerContext| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    build_bar(&state, &registry, on_exit.clone());

    registry.dispatch(&pointer_enter("bar-item-0"));
    let root = build_bar(&state, &registry, on_exit);
    let html = to_html(&root);

    assert!(html.contains(r##"<a id="bar-item-0-0-link" href="#save">Save<span>Ctrl+S</span></a>"##));
    assert!(html.contains(r#"<li id="bar-item-0-1" class="has-divider""#));
    assert!(html.contains(r#"<button id="bar-item-0-1-button">Exit</button>"#));

    assert!(registry.dispatch(&Event::click("bar-item-0-1-button")));
    assert_eq!(exits.load(Ordering::SeqCst), 1);
}
