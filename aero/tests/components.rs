use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use aero::aerodom::{Element, Event, find_element, to_html};
use aero::widgets::{
    BackgroundAttachment, Balloon, BalloonPosition, Button, Checkbox, Dropdown, DropdownOption,
    GroupBox, OptionButton, ProgressBar, ProgressVariant, SearchBox, Slider, Spinner,
    SpinnerVariant, Tab, Tabs, TextBox, Window,
};
use aero::{Controlled, EventData, Handler, HandlerContext, HandlerRegistry, State, WidgetHandlers};

fn recorder(name: &'static str) -> (WidgetHandlers, Arc<Mutex<Vec<EventData>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let mut handlers = WidgetHandlers::new();
    handlers.insert(
        name,
        Arc::new(move |hx: &HandlerContext| sink.lock().unwrap().push(hx.event().clone())),
    );
    (handlers, seen)
}

fn counter() -> (Handler, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let inner = Arc::clone(&count);
    let handler: Handler = Arc::new(move |_: &HandlerContext| {
        inner.fetch_add(1, Ordering::SeqCst);
    });
    (handler, count)
}

// =============================================================================
// Button
// =============================================================================

#[test]
fn test_button_markup_and_click() {
    let registry = HandlerRegistry::new();
    let (on_click, clicks) = counter();
    let mut handlers = WidgetHandlers::new();
    handlers.insert("on_click", on_click);

    let button = Button::new()
        .id("ok")
        .label("OK")
        .is_default()
        .class("wide")
        .build(&registry, &handlers);

    assert_eq!(to_html(&button), r#"<button id="ok" class="default wide">OK</button>"#);
    assert!(registry.dispatch(&Event::click("ok")));
    assert_eq!(clicks.load(Ordering::SeqCst), 1);
}

#[test]
fn test_disabled_button_registers_nothing() {
    let registry = HandlerRegistry::new();
    let (on_click, _) = counter();
    let mut handlers = WidgetHandlers::new();
    handlers.insert("on_click", on_click);

    let button = Button::new()
        .id("no")
        .label("No")
        .disabled()
        .build(&registry, &handlers);

    assert!(button.has_flag("disabled"));
    assert!(registry.is_empty());
}

#[test]
fn test_passthrough_attributes() {
    let button = Button::new()
        .id("p")
        .attr("title", "Tip")
        .attr("data-x", "1")
        .style("width", "80px")
        .build(&HandlerRegistry::new(), &WidgetHandlers::new());

    assert_eq!(
        to_html(&button),
        r#"<button id="p" title="Tip" data-x="1" style="width: 80px"></button>"#
    );
}

// =============================================================================
// Checkbox and OptionButton
// =============================================================================

#[test]
fn test_checkbox_markup() {
    let state = State::default();
    let checkbox = Checkbox::new()
        .label("Enable notifications")
        .default_checked(true)
        .state(&state)
        .build(&HandlerRegistry::new(), &WidgetHandlers::new());

    assert_eq!(
        to_html(&checkbox),
        concat!(
            r#"<div><input id="checkbox-enable-notifications" type="checkbox" checked>"#,
            r#"<label for="checkbox-enable-notifications">Enable notifications</label></div>"#
        )
    );
}

#[test]
fn test_checkbox_click_flips() {
    let state = State::new(Controlled::default());
    let registry = HandlerRegistry::new();
    let (handlers, seen) = recorder("on_change");
    let build = |registry: &HandlerRegistry| {
        Checkbox::new()
            .id("cb")
            .label("Wrap")
            .state(&state)
            .build(registry, &handlers)
    };
    build(&registry);

    registry.dispatch(&Event::click("cb"));
    let root = build(&registry);

    assert!(find_element(&root, "cb").unwrap().has_flag("checked"));
    assert_eq!(*seen.lock().unwrap(), [EventData::Checked { checked: true }]);
}

#[test]
fn test_checkbox_second_click_unchecks() {
    let state = State::default();
    let registry = HandlerRegistry::new();
    let (handlers, seen) = recorder("on_change");
    let build = |registry: &HandlerRegistry| {
        Checkbox::new()
            .label("Wrap")
            .state(&state)
            .build(registry, &handlers)
    };
    build(&registry);

    registry.dispatch(&Event::click("checkbox-wrap"));
    registry.dispatch(&Event::click("checkbox-wrap"));
    let root = build(&registry);

    assert!(!find_element(&root, "checkbox-wrap").unwrap().has_flag("checked"));
    assert_eq!(
        *seen.lock().unwrap(),
        [
            EventData::Checked { checked: true },
            EventData::Checked { checked: false },
        ]
    );
}

#[test]
fn test_controlled_checkbox_follows_caller() {
    let state = State::default();
    let registry = HandlerRegistry::new();
    let (handlers, seen) = recorder("on_change");
    let build = |registry: &HandlerRegistry, checked: bool| {
        Checkbox::new()
            .id("cc")
            .checked(checked)
            .state(&state)
            .build(registry, &handlers)
    };
    build(&registry, false);

    registry.dispatch(&Event::click("cc"));
    // Caller ignored the change
    assert!(!find_element(&build(&registry, false), "cc").unwrap().has_flag("checked"));
    // Caller accepted it
    assert!(find_element(&build(&registry, true), "cc").unwrap().has_flag("checked"));
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[test]
fn test_option_button() {
    let registry = HandlerRegistry::new();
    let (handlers, seen) = recorder("on_change");

    let option = OptionButton::new("size", "Extra large")
        .value("xl")
        .checked(true)
        .build(&registry, &handlers);

    assert_eq!(
        to_html(&option),
        concat!(
            r#"<div><input id="radio-size-extra-large" type="radio" name="size" value="xl" checked>"#,
            r#"<label for="radio-size-extra-large">Extra large</label></div>"#
        )
    );

    registry.dispatch(&Event::click("radio-size-extra-large"));
    assert_eq!(
        *seen.lock().unwrap(),
        [EventData::Change {
            text: "xl".to_string()
        }]
    );
}

// =============================================================================
// Text inputs
// =============================================================================

#[test]
fn test_text_box() {
    let registry = HandlerRegistry::new();
    let (handlers, seen) = recorder("on_change");

    let text_box = TextBox::new()
        .label("User name")
        .placeholder("name")
        .build(&registry, &handlers);

    assert_eq!(
        to_html(&text_box),
        concat!(
            r#"<div class="group"><label for="textbox-user-name">User name</label>"#,
            r#"<input id="textbox-user-name" type="text" placeholder="name"></div>"#
        )
    );

    registry.dispatch(&Event::input("textbox-user-name", "ann"));
    assert_eq!(seen.lock().unwrap()[0].text(), Some("ann"));
}

#[test]
fn test_search_box_regular_and_instant() {
    let registry = HandlerRegistry::new();
    let (on_search, searches) = counter();
    let mut handlers = WidgetHandlers::new();
    handlers.insert("on_search", on_search);

    let regular = SearchBox::new()
        .id("find")
        .placeholder("Search")
        .build(&registry, &handlers);
    assert_eq!(
        to_html(&regular),
        concat!(
            r#"<div class="searchbox"><input id="find" type="search" placeholder="Search">"#,
            r#"<button id="find-button" aria-label="search"></button></div>"#
        )
    );
    registry.dispatch(&Event::click("find-button"));
    assert_eq!(searches.load(Ordering::SeqCst), 1);

    let instant = SearchBox::new()
        .id("filter")
        .instant()
        .build(&registry, &handlers);
    assert_eq!(to_html(&instant), r#"<input id="filter" type="search">"#);
}

#[test]
fn test_dropdown_marks_value() {
    let registry = HandlerRegistry::new();
    let dropdown = Dropdown::new()
        .label("Color")
        .option(DropdownOption::new("r", "Red"))
        .option(DropdownOption::new("g", "Green"))
        .option(DropdownOption::new("b", "Blue").disabled())
        .value("g")
        .build(&registry, &WidgetHandlers::new());

    assert_eq!(
        to_html(&dropdown),
        concat!(
            r#"<div><label for="dropdown-color">Color</label><select id="dropdown-color">"#,
            r#"<option value="r">Red</option>"#,
            r#"<option value="g" selected>Green</option>"#,
            r#"<option value="b" disabled>Blue</option>"#,
            "</select></div>"
        )
    );
}

// =============================================================================
// Tabs
// =============================================================================

fn tabs() -> Vec<Tab> {
    vec![
        Tab::new("general", "General", Element::p().inner_text("g")).disabled(),
        Tab::new("sharing", "Sharing", Element::p().inner_text("s")),
        Tab::new("security", "Security", Element::p().inner_text("x")),
    ]
}

#[test]
fn test_tabs_default_to_first_enabled() {
    let state = State::default();
    let root = Tabs::new()
        .tabs(tabs())
        .state(&state)
        .build(&HandlerRegistry::new(), &WidgetHandlers::new());

    let html = to_html(&root);
    assert!(html.starts_with(r#"<section class="tabs"><menu role="tablist" aria-label="Tabs">"#));
    assert!(html.contains(
        r#"<button id="general-tab" role="tab" aria-controls="general" aria-selected="false" disabled>General</button>"#
    ));
    assert!(html.contains(r#"aria-controls="sharing" aria-selected="true">Sharing</button>"#));
    assert!(html.contains(r#"<article id="general" role="tabpanel" hidden>"#));
    assert!(html.contains(r#"<article id="sharing" role="tabpanel"><p>s</p></article>"#));
}

#[test]
fn test_tab_click_switches_panel() {
    let state = State::default();
    let registry = HandlerRegistry::new();
    let (handlers, seen) = recorder("on_change");
    let build = |registry: &HandlerRegistry| {
        Tabs::new()
            .tabs(tabs())
            .aria_label("Properties")
            .state(&state)
            .build(registry, &handlers)
    };
    build(&registry);

    assert!(!registry.dispatch(&Event::click("general-tab")));
    registry.dispatch(&Event::click("security-tab"));
    let root = build(&registry);

    assert!(!find_element(&root, "security").unwrap().has_flag("hidden"));
    assert!(find_element(&root, "sharing").unwrap().has_flag("hidden"));
    assert_eq!(seen.lock().unwrap()[0].text(), Some("security"));
}

// =============================================================================
// Containers
// =============================================================================

#[test]
fn test_group_box() {
    let group = GroupBox::new("Options")
        .child(Element::p().inner_text("inside"))
        .build();

    assert_eq!(
        to_html(&group),
        "<fieldset><legend>Options</legend><p>inside</p></fieldset>"
    );
}

#[test]
fn test_window_defaults() {
    let window = Window::new("Notepad")
        .id("np")
        .child(Element::p().inner_text("Hello"))
        .build(&HandlerRegistry::new(), &WidgetHandlers::new());

    assert_eq!(
        to_html(&window),
        concat!(
            r#"<div class="window active">"#,
            r#"<div class="title-bar" style="background-attachment: fixed">"#,
            r#"<div class="title-bar-text">Notepad</div>"#,
            r#"<div class="title-bar-controls"><button id="np-close" aria-label="Close"></button></div>"#,
            "</div>",
            r#"<div class="window-body has-space"><p>Hello</p></div>"#,
            "</div>"
        )
    );
}

#[test]
fn test_window_dialog() {
    let window = Window::new("Confirm")
        .id("dlg")
        .dialog("dlg-title")
        .bright(true)
        .glass(true)
        .background_color("#cde")
        .background_attachment(BackgroundAttachment::Local)
        .show_close(false)
        .has_space(false)
        .status_bar(["Ready", "Ln 1"])
        .build(&HandlerRegistry::new(), &WidgetHandlers::new());

    assert_eq!(window.id.as_deref(), Some("dlg"));
    assert_eq!(window.class_name(), "window glass active is-bright");
    assert_eq!(window.get_attr("role"), Some("dialog"));
    assert_eq!(window.get_attr("aria-labelledby"), Some("dlg-title"));
    assert_eq!(window.style.get("--w7-w-bg"), Some("#cde"));

    let html = to_html(&window);
    assert!(html.contains(r#"<div id="dlg-title" class="title-bar-text">Confirm</div>"#));
    assert!(html.contains("background-attachment: local"));
    assert!(!html.contains("title-bar-controls"));
    assert!(html.contains(r#"<div class="window-body"></div>"#));
    assert!(html.contains(concat!(
        r#"<div class="status-bar"><p class="status-bar-field">Ready</p>"#,
        r#"<p class="status-bar-field">Ln 1</p></div>"#
    )));
}

#[test]
fn test_bright_needs_dialog() {
    let window = Window::new("Plain")
        .bright(true)
        .active(false)
        .build(&HandlerRegistry::new(), &WidgetHandlers::new());

    assert_eq!(window.class_name(), "window");
    assert_eq!(window.get_attr("role"), None);
}

#[test]
fn test_window_controls_dispatch() {
    let registry = HandlerRegistry::new();
    let (on_help, helps) = counter();
    let (on_close, closes) = counter();
    let mut handlers = WidgetHandlers::new();
    handlers.insert("on_help", on_help);
    handlers.insert("on_close", on_close);

    let window = Window::new("Tools")
        .id("w")
        .show_help(true)
        .show_minimize(true)
        .show_maximize(true)
        .build(&registry, &handlers);

    let labels: Vec<_> = aero::aerodom::find_by_tag(&window, "button")
        .into_iter()
        .filter_map(|b| b.get_attr("aria-label"))
        .collect();
    assert_eq!(labels, ["Help", "Minimize", "Maximize", "Close"]);

    registry.dispatch(&Event::click("w-help"));
    registry.dispatch(&Event::click("w-close"));
    assert!(!registry.dispatch(&Event::click("w-minimize")));
    assert_eq!(helps.load(Ordering::SeqCst), 1);
    assert_eq!(closes.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Indicators
// =============================================================================

#[test]
fn test_slider() {
    let slider = Slider::new()
        .label("Volume")
        .low_label("Low")
        .high_label("High")
        .range(0.0, 10.0)
        .value(5.0)
        .box_indicator(true)
        .build(&HandlerRegistry::new(), &WidgetHandlers::new());

    assert_eq!(
        to_html(&slider),
        concat!(
            r#"<div style="display: flex; align-items: center; gap: 0.5rem">"#,
            r#"<label for="slider-volume">Volume</label><label>Low</label>"#,
            r#"<input id="slider-volume" class="has-box-indicator" type="range" min="0" max="10" value="5">"#,
            "<label>High</label></div>"
        )
    );
}

#[test]
fn test_vertical_slider() {
    let slider = Slider::new()
        .id("v")
        .vertical(true)
        .gap(1.0)
        .build(&HandlerRegistry::new(), &WidgetHandlers::new());

    assert_eq!(slider.style.get("flex-direction"), Some("column"));
    assert_eq!(slider.style.get("gap"), Some("1rem"));
    assert!(find_element(&slider, "v").unwrap().has_class("is-vertical"));
}

#[test]
fn test_progress_bar() {
    let bar = ProgressBar::new().value(40.0).build();
    assert_eq!(
        to_html(&bar),
        r#"<div class="animate default" role="progressbar" aria-valuenow="40"><div style="width: 40%"></div></div>"#
    );

    let marquee = ProgressBar::new()
        .marquee(true)
        .animate(false)
        .variant(ProgressVariant::Paused)
        .build();
    assert_eq!(
        to_html(&marquee),
        r#"<div class="marquee paused" role="progressbar"></div>"#
    );

    let clamped = ProgressBar::new().value(150.0).variant(ProgressVariant::Error).build();
    assert_eq!(clamped.get_attr("aria-valuenow"), Some("100"));
    assert!(clamped.has_class("error"));
}

#[test]
fn test_spinner_variants() {
    assert_eq!(
        to_html(&Spinner::new().build()),
        r#"<span class="spinner" aria-label="Loading"></span>"#
    );
    assert_eq!(
        to_html(
            &Spinner::new()
                .variant(SpinnerVariant::LoaderAnimate)
                .aria_label("Saving")
                .build()
        ),
        r#"<span class="loader animate" aria-label="Saving"></span>"#
    );
}

#[test]
fn test_balloon() {
    assert_eq!(
        to_html(&Balloon::new().text("Caps Lock is on").build()),
        r#"<div class="is-bottom is-right" role="tooltip">Caps Lock is on</div>"#
    );

    let hidden = Balloon::new()
        .position(BalloonPosition::TopLeft)
        .visible(false)
        .build();
    assert_eq!(hidden.class_name(), "hidden is-top is-left");
}
