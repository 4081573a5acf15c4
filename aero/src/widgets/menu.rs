//! Menu widget - a vertical menu with nested submenus.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use aerodom::{Element, generate_id};

use super::disclosure::{Disclosure, DisclosureIntent};
use super::selection::{SelectModifier, Selection};
use super::{HasState, NeedsState, Passthrough, derive_id};
use crate::controlled::Controlled;
use crate::handler_context::{EventData, Handler, events, notify};
use crate::state::State;
use crate::{HandlerRegistry, WidgetHandlers};

// =============================================================================
// Items
// =============================================================================

/// Fields shared by every menu item.
#[derive(Clone, Debug, Default)]
pub struct ItemBase {
    pub label: String,
    pub disabled: bool,
    pub has_divider: bool,
    pub icon: Option<String>,
}

/// Plain entry, optionally a link.
#[derive(Clone, Default)]
pub struct LinkItem {
    pub base: ItemBase,
    pub href: Option<String>,
    pub on_click: Option<Handler>,
}

/// Entry of a named radio group; one value per group is checked.
#[derive(Clone, Default)]
pub struct RadioItem {
    pub base: ItemBase,
    pub name: String,
    pub value: String,
    pub checked: bool,
    pub on_change: Option<Handler>,
}

/// Entry with its own checked flag.
#[derive(Clone, Default)]
pub struct CheckboxItem {
    pub base: ItemBase,
    pub checked: Option<bool>,
    pub default_checked: bool,
    pub on_change: Option<Handler>,
}

/// Entry opening a nested menu.
#[derive(Clone, Debug, Default)]
pub struct SubmenuItem {
    pub base: ItemBase,
    pub items: Vec<MenuItem>,
}

/// A menu entry.
#[derive(Clone)]
pub enum MenuItem {
    Link(LinkItem),
    Radio(RadioItem),
    Checkbox(CheckboxItem),
    Submenu(SubmenuItem),
}

impl MenuItem {
    pub fn link(label: impl Into<String>) -> Self {
        Self::Link(LinkItem {
            base: ItemBase::labelled(label),
            ..Default::default()
        })
    }

    pub fn radio(
        name: impl Into<String>,
        value: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self::Radio(RadioItem {
            base: ItemBase::labelled(label),
            name: name.into(),
            value: value.into(),
            ..Default::default()
        })
    }

    pub fn checkbox(label: impl Into<String>) -> Self {
        Self::Checkbox(CheckboxItem {
            base: ItemBase::labelled(label),
            ..Default::default()
        })
    }

    pub fn submenu(label: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self::Submenu(SubmenuItem {
            base: ItemBase::labelled(label),
            items,
        })
    }

    pub fn base(&self) -> &ItemBase {
        match self {
            Self::Link(item) => &item.base,
            Self::Radio(item) => &item.base,
            Self::Checkbox(item) => &item.base,
            Self::Submenu(item) => &item.base,
        }
    }

    fn base_mut(&mut self) -> &mut ItemBase {
        match self {
            Self::Link(item) => &mut item.base,
            Self::Radio(item) => &mut item.base,
            Self::Checkbox(item) => &mut item.base,
            Self::Submenu(item) => &mut item.base,
        }
    }

    pub fn label(&self) -> &str {
        &self.base().label
    }

    pub fn disabled(mut self) -> Self {
        self.base_mut().disabled = true;
        self
    }

    /// Draw a separator line below this item.
    pub fn divider(mut self) -> Self {
        self.base_mut().has_divider = true;
        self
    }

    /// Icon image shown before a link label.
    pub fn icon(mut self, src: impl Into<String>) -> Self {
        self.base_mut().icon = Some(src.into());
        self
    }

    /// Link target. Ignored for other kinds.
    pub fn href(mut self, href: impl Into<String>) -> Self {
        if let Self::Link(item) = &mut self {
            item.href = Some(href.into());
        }
        self
    }

    /// Click callback of a link. Ignored for other kinds.
    pub fn on_click(mut self, handler: Handler) -> Self {
        if let Self::Link(item) = &mut self {
            item.on_click = Some(handler);
        }
        self
    }

    /// Caller-owned checked flag of a radio or checkbox item.
    pub fn checked(mut self, checked: bool) -> Self {
        match &mut self {
            Self::Radio(item) => item.checked = checked,
            Self::Checkbox(item) => item.checked = Some(checked),
            Self::Link(_) | Self::Submenu(_) => {}
        }
        self
    }

    /// Initial flag of a checkbox item. Ignored for other kinds.
    pub fn default_checked(mut self, checked: bool) -> Self {
        if let Self::Checkbox(item) = &mut self {
            item.default_checked = checked;
        }
        self
    }

    /// Change callback of a radio (`EventData::Change`) or checkbox
    /// (`EventData::Checked`) item.
    pub fn on_change(mut self, handler: Handler) -> Self {
        match &mut self {
            Self::Radio(item) => item.on_change = Some(handler),
            Self::Checkbox(item) => item.on_change = Some(handler),
            Self::Link(_) | Self::Submenu(_) => {}
        }
        self
    }
}

impl ItemBase {
    fn labelled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Link(item) => f.debug_tuple("Link").field(&item.base.label).finish(),
            Self::Radio(item) => f
                .debug_tuple("Radio")
                .field(&item.name)
                .field(&item.value)
                .finish(),
            Self::Checkbox(item) => f.debug_tuple("Checkbox").field(&item.base.label).finish(),
            Self::Submenu(item) => f
                .debug_tuple("Submenu")
                .field(&item.base.label)
                .field(&item.items)
                .finish(),
        }
    }
}

// =============================================================================
// MenuState
// =============================================================================

/// State of a menu tree.
#[derive(Clone, Debug, Default)]
pub struct MenuState {
    /// Checked value per radio group name.
    pub radio_groups: HashMap<String, Selection<String>>,
    /// Checkbox items keyed by item path.
    pub checkboxes: HashMap<String, Controlled<bool>>,
    /// Open submenus keyed by item path.
    pub submenus: Disclosure<String>,
}

impl MenuState {
    /// The checked value of a radio group.
    pub fn radio_value(&self, group: &str) -> Option<&str> {
        self.radio_groups
            .get(group)
            .and_then(|s| s.anchor())
            .map(String::as_str)
    }
}

// =============================================================================
// Menu
// =============================================================================

/// A menu builder.
///
/// Submenus open when the pointer enters their item or on Enter /
/// ArrowRight, and close when the pointer leaves or on Escape / ArrowLeft.
/// The menu-level `on_toggle` handler hears every submenu change.
///
/// # Example
///
/// ```ignore
/// Menu::new()
///     .items(vec![
///         MenuItem::link("Open").href("#open"),
///         MenuItem::radio("view", "list", "List").checked(true),
///         MenuItem::radio("view", "icons", "Icons"),
///         MenuItem::checkbox("Status bar").divider(),
///         MenuItem::submenu("Recent", vec![MenuItem::link("a.txt")]),
///     ])
///     .can_hover(true)
///     .state(&menu_state)
///     .build(&registry, &handlers);
/// ```
#[derive(Clone, Debug)]
pub struct Menu<S = NeedsState> {
    state_marker: S,
    id: Option<String>,
    items: Vec<MenuItem>,
    can_hover: bool,
    width: Option<String>,
    passthrough: Passthrough,
}

impl Default for Menu<NeedsState> {
    fn default() -> Self {
        Self::new()
    }
}

impl Menu<NeedsState> {
    /// Create a new menu builder.
    pub fn new() -> Self {
        Self {
            state_marker: NeedsState,
            id: None,
            items: Vec::new(),
            can_hover: false,
            width: None,
            passthrough: Passthrough::default(),
        }
    }

    /// Set the state reference. Required before calling `build()`.
    pub fn state(self, s: &State<MenuState>) -> Menu<HasState<'_, MenuState>> {
        Menu {
            state_marker: HasState(s),
            id: self.id,
            items: self.items,
            can_hover: self.can_hover,
            width: self.width,
            passthrough: self.passthrough,
        }
    }
}

impl<S> Menu<S> {
    /// Set the menu id. Item ids are `<id>-item-<path>`.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn items(mut self, items: Vec<MenuItem>) -> Self {
        self.items = items;
        self
    }

    pub fn item(mut self, item: MenuItem) -> Self {
        self.items.push(item);
        self
    }

    /// Highlight items under the pointer.
    pub fn can_hover(mut self, can_hover: bool) -> Self {
        self.can_hover = can_hover;
        self
    }

    /// CSS width of the menu.
    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn width_px(self, px: u32) -> Self {
        self.width(format!("{px}px"))
    }

    passthrough_methods!();
}

impl<'a> Menu<HasState<'a, MenuState>> {
    /// Build the menu element.
    pub fn build(self, registry: &HandlerRegistry, handlers: &WidgetHandlers) -> Element {
        let state = self.state_marker.0;
        let id = self.id.clone().unwrap_or_else(|| generate_id("menu"));

        seed_checkboxes(state, &self.items, "");
        let snapshot = state.get();
        log::debug!(
            "[Menu::build] id={} items={} open_submenus={}",
            id,
            self.items.len(),
            snapshot.submenus.open_count()
        );

        let builder = ItemBuilder {
            menu_id: &id,
            snapshot: &snapshot,
            state,
            registry,
            on_toggle: handlers.get("on_toggle").cloned(),
        };

        let menu = builder
            .list(&self.items, "")
            .id(&id)
            .class_if(self.can_hover, "can-hover")
            .style_opt("width", self.width);

        self.passthrough.apply(menu)
    }
}

/// Seed checkbox bridges for items seen for the first time and mirror
/// changed caller values.
fn seed_checkboxes(state: &State<MenuState>, items: &[MenuItem], parent: &str) {
    for (index, item) in items.iter().enumerate() {
        let path = item_path(parent, index);
        match item {
            MenuItem::Checkbox(check) => {
                let external = check.checked.as_ref();
                let stale = state.with(|s| {
                    s.checkboxes
                        .get(&path)
                        .is_none_or(|bridge| bridge.needs_sync(external))
                });
                if stale {
                    state.update_quiet(|s| {
                        let bridge = s.checkboxes.entry(path.clone()).or_default();
                        bridge.seed(external, check.default_checked);
                        bridge.sync(external);
                    });
                }
            }
            MenuItem::Submenu(sub) => seed_checkboxes(state, &sub.items, &path),
            MenuItem::Link(_) | MenuItem::Radio(_) => {}
        }
    }
}

pub(crate) fn item_path(parent: &str, index: usize) -> String {
    if parent.is_empty() {
        index.to_string()
    } else {
        format!("{}-{}", parent, index)
    }
}

struct ItemBuilder<'b> {
    menu_id: &'b str,
    snapshot: &'b MenuState,
    state: &'b State<MenuState>,
    registry: &'b HandlerRegistry,
    on_toggle: Option<Handler>,
}

impl ItemBuilder<'_> {
    /// `<ul role="menu">` for one level.
    fn list(&self, items: &[MenuItem], parent: &str) -> Element {
        let children = items
            .iter()
            .enumerate()
            .map(|(index, item)| self.item(item, &item_path(parent, index)));
        Element::ul().role("menu").children(children)
    }

    fn item(&self, item: &MenuItem, path: &str) -> Element {
        let base = item.base();
        let li_id = format!("{}-item-{}", self.menu_id, path);

        let li = Element::li()
            .id(&li_id)
            .role("menuitem")
            .attr("tabindex", "0")
            .aria_bool("haspopup", matches!(item, MenuItem::Submenu(_)));
        let li = if base.disabled {
            li.aria_bool("disabled", true)
        } else {
            li
        }
        .class_if(base.has_divider, "has-divider");

        match item {
            MenuItem::Link(link) => self.link(li, &li_id, link),
            MenuItem::Radio(radio) => self.radio(li, radio),
            MenuItem::Checkbox(check) => self.checkbox(li, path, check),
            MenuItem::Submenu(sub) => self.submenu(li, &li_id, path, sub),
        }
    }

    fn link(&self, li: Element, li_id: &str, link: &LinkItem) -> Element {
        if !link.base.disabled
            && let Some(on_click) = link.on_click.clone()
        {
            self.registry.register(li_id, events::CLICK, on_click);
        }

        let icon = link.base.icon.as_ref().map(|src| {
            Element::img()
                .attr("src", src.as_str())
                .attr("alt", "")
                .attr("width", "18")
                .attr("height", "18")
        });
        let label = match &link.href {
            Some(href) => Element::a()
                .attr("href", href.as_str())
                .inner_text(link.base.label.as_str()),
            None => Element::text(link.base.label.as_str()),
        };
        li.child_opt(icon).child(label)
    }

    fn radio(&self, li: Element, radio: &RadioItem) -> Element {
        let input_id = format!("{}-{}", radio.name, radio.value);
        let group_checked = self
            .snapshot
            .radio_groups
            .get(&radio.name)
            .is_some_and(|group| group.is_selected(&radio.value));

        if !radio.base.disabled {
            let state = self.state.clone();
            let group = radio.name.clone();
            let value = radio.value.clone();
            let on_change = radio.on_change.clone();
            self.registry.register(
                &input_id,
                events::CLICK,
                Arc::new(move |hx| {
                    state.update(|s| {
                        s.radio_groups
                            .entry(group.clone())
                            .or_insert_with(Selection::single)
                            .select(value.clone(), SelectModifier::None, &[], |_| false);
                    });
                    log::debug!("[Menu::on_radio] {}={}", group, value);
                    notify(on_change.as_ref(), hx, EventData::Change { text: value.clone() });
                }),
            );
        }

        li.child(
            Element::input("radio")
                .id(&input_id)
                .attr("name", radio.name.as_str())
                .flag("checked", radio.checked || group_checked),
        )
        .child(
            Element::label()
                .attr("for", &input_id)
                .inner_text(radio.base.label.as_str()),
        )
    }

    fn checkbox(&self, li: Element, path: &str, check: &CheckboxItem) -> Element {
        let input_id = derive_id("checkbox", Some(&check.base.label));
        let checked = self
            .snapshot
            .checkboxes
            .get(path)
            .map(|bridge| *bridge.value(check.checked.as_ref()))
            .unwrap_or(check.default_checked);

        if !check.base.disabled {
            let state = self.state.clone();
            let key = path.to_string();
            let external = check.checked;
            let default_checked = check.default_checked;
            let on_change = check.on_change.clone();
            self.registry.register(
                &input_id,
                events::CLICK,
                Arc::new(move |hx| {
                    let current = state.with(|s| {
                        s.checkboxes
                            .get(&key)
                            .map(|bridge| *bridge.value(external.as_ref()))
                            .unwrap_or(default_checked)
                    });
                    let next = !current;
                    state.update(|s| s.checkboxes.entry(key.clone()).or_default().change(next));
                    notify(on_change.as_ref(), hx, EventData::Checked { checked: next });
                }),
            );
        }

        li.child(
            Element::input("checkbox")
                .id(&input_id)
                .flag("checked", checked),
        )
        .child(
            Element::label()
                .attr("for", &input_id)
                .inner_text(check.base.label.as_str()),
        )
    }

    fn submenu(&self, li: Element, li_id: &str, path: &str, sub: &SubmenuItem) -> Element {
        let node = path.to_string();
        let open = self.snapshot.submenus.is_open(&node);

        if !sub.base.disabled {
            register_submenu(self.registry, self.state, li_id, node, self.on_toggle.clone());
        }

        let li = li.child(Element::text(sub.base.label.as_str()));
        if open {
            li.child(
                self.list(&sub.items, path)
                    .style("position", "absolute")
                    .style("left", "100%")
                    .style("top", "0"),
            )
        } else {
            li
        }
    }
}

/// Hover and keyboard handlers of an item that opens a nested menu.
///
/// Both channels write the same open flag for `node`.
pub(crate) fn register_submenu(
    registry: &HandlerRegistry,
    state: &State<impl SubmenuState + Send + Sync + 'static>,
    li_id: &str,
    node: String,
    on_toggle: Option<Handler>,
) {
    let enter_state = state.clone();
    let enter_node = node.clone();
    let enter_toggle = on_toggle.clone();
    registry.register(
        li_id,
        events::POINTER_ENTER,
        Arc::new(move |hx| {
            enter_state.update(|s| s.submenus_mut().pointer_enter(enter_node.clone()));
            notify(enter_toggle.as_ref(), hx, EventData::Toggle { open: true });
        }),
    );

    let leave_state = state.clone();
    let leave_node = node.clone();
    let leave_toggle = on_toggle.clone();
    registry.register(
        li_id,
        events::POINTER_LEAVE,
        Arc::new(move |hx| {
            leave_state.update(|s| s.submenus_mut().pointer_leave(leave_node.clone()));
            notify(leave_toggle.as_ref(), hx, EventData::Toggle { open: false });
        }),
    );

    let key_state = state.clone();
    registry.register(
        li_id,
        events::KEY,
        Arc::new(move |hx| {
            let Some(intent) = hx.event().key().and_then(DisclosureIntent::from_key) else {
                return;
            };
            let mut open = false;
            key_state.update(|s| open = s.submenus_mut().apply_intent(node.clone(), intent));
            log::debug!("[Menu::on_key] {} {:?} open={}", node, intent, open);
            notify(on_toggle.as_ref(), hx, EventData::Toggle { open });
        }),
    );
}

/// State types holding per-path submenu disclosure.
pub(crate) trait SubmenuState {
    fn submenus_mut(&mut self) -> &mut Disclosure<String>;
}

impl SubmenuState for MenuState {
    fn submenus_mut(&mut self) -> &mut Disclosure<String> {
        &mut self.submenus
    }
}

impl SubmenuState for Disclosure<String> {
    fn submenus_mut(&mut self) -> &mut Disclosure<String> {
        self
    }
}
