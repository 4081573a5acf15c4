//! Menu bar widget - a horizontal bar of menus.

use std::fmt;

use aerodom::{Element, generate_id};

use super::disclosure::Disclosure;
use super::menu::{item_path, register_submenu};
use super::{HasState, NeedsState, Passthrough};
use crate::handler_context::{Handler, events};
use crate::state::State;
use crate::{HandlerRegistry, WidgetHandlers};

/// Keyboard shortcut shown next to an item, e.g. `Ctrl+Shift+S`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Shortcut {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Shortcut {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn alt(mut self) -> Self {
        self.alt = true;
        self
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = [
            self.ctrl.then_some("Ctrl"),
            self.shift.then_some("Shift"),
            self.alt.then_some("Alt"),
            Some(self.key.as_str()).filter(|k| !k.is_empty()),
        ];
        let joined: Vec<&str> = parts.into_iter().flatten().collect();
        write!(f, "{}", joined.join("+"))
    }
}

/// An entry of the menu bar or of one of its menus.
#[derive(Clone, Default)]
pub struct MenuBarItem {
    pub label: String,
    pub href: Option<String>,
    pub on_click: Option<Handler>,
    pub shortcut: Option<Shortcut>,
    pub has_divider: bool,
    pub items: Vec<MenuBarItem>,
}

impl MenuBarItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn on_click(mut self, handler: Handler) -> Self {
        self.on_click = Some(handler);
        self
    }

    /// Shortcut label. Shown on link items only.
    pub fn shortcut(mut self, shortcut: Shortcut) -> Self {
        self.shortcut = Some(shortcut);
        self
    }

    pub fn divider(mut self) -> Self {
        self.has_divider = true;
        self
    }

    pub fn items(mut self, items: Vec<MenuBarItem>) -> Self {
        self.items = items;
        self
    }

    pub fn item(mut self, item: MenuBarItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn has_submenu(&self) -> bool {
        !self.items.is_empty()
    }
}

impl fmt::Debug for MenuBarItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuBarItem")
            .field("label", &self.label)
            .field("href", &self.href)
            .field("shortcut", &self.shortcut)
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

/// A menu bar builder.
///
/// Items with children open their menu on pointer enter or Enter /
/// ArrowRight and close it on pointer leave or Escape / ArrowLeft. Open
/// state is kept per item path in a shared `Disclosure`.
///
/// Item content:
/// - `on_click` without `href`: a button
/// - `href`: a link followed by the shortcut, if any
/// - otherwise: the label
#[derive(Clone, Debug)]
pub struct MenuBar<S = NeedsState> {
    state_marker: S,
    id: Option<String>,
    items: Vec<MenuBarItem>,
    can_hover: bool,
    passthrough: Passthrough,
}

impl Default for MenuBar<NeedsState> {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuBar<NeedsState> {
    pub fn new() -> Self {
        Self {
            state_marker: NeedsState,
            id: None,
            items: Vec::new(),
            can_hover: false,
            passthrough: Passthrough::default(),
        }
    }

    /// Set the state reference. Required before calling `build()`.
    pub fn state(
        self,
        s: &State<Disclosure<String>>,
    ) -> MenuBar<HasState<'_, Disclosure<String>>> {
        MenuBar {
            state_marker: HasState(s),
            id: self.id,
            items: self.items,
            can_hover: self.can_hover,
            passthrough: self.passthrough,
        }
    }
}

impl<S> MenuBar<S> {
    /// Set the bar id. Item ids are `<id>-item-<path>`.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn items(mut self, items: Vec<MenuBarItem>) -> Self {
        self.items = items;
        self
    }

    pub fn item(mut self, item: MenuBarItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn can_hover(mut self, can_hover: bool) -> Self {
        self.can_hover = can_hover;
        self
    }

    passthrough_methods!();
}

impl<'a> MenuBar<HasState<'a, Disclosure<String>>> {
    /// Build the menu bar element.
    pub fn build(self, registry: &HandlerRegistry, handlers: &WidgetHandlers) -> Element {
        let state = self.state_marker.0;
        let id = self.id.clone().unwrap_or_else(|| generate_id("menubar"));
        let open = state.get();
        log::debug!(
            "[MenuBar::build] id={} items={} open={}",
            id,
            self.items.len(),
            open.open_count()
        );

        let builder = BarBuilder {
            bar_id: &id,
            open: &open,
            state,
            registry,
            on_toggle: handlers.get("on_toggle").cloned(),
        };
        let children = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| builder.item(item, &item_path("", index)));

        let bar = Element::ul()
            .id(&id)
            .role("menubar")
            .class_if(self.can_hover, "can-hover")
            .children(children);

        self.passthrough.apply(bar)
    }
}

struct BarBuilder<'b> {
    bar_id: &'b str,
    open: &'b Disclosure<String>,
    state: &'b State<Disclosure<String>>,
    registry: &'b HandlerRegistry,
    on_toggle: Option<Handler>,
}

impl BarBuilder<'_> {
    fn item(&self, item: &MenuBarItem, path: &str) -> Element {
        let li_id = format!("{}-item-{}", self.bar_id, path);
        let has_submenu = item.has_submenu();

        let li = Element::li()
            .id(&li_id)
            .role("menuitem")
            .attr("tabindex", "0")
            .aria_bool("haspopup", has_submenu)
            .class_if(item.has_divider, "has-divider")
            .child(self.content(item, &li_id));

        if !has_submenu {
            return li;
        }

        let node = path.to_string();
        let is_open = self.open.is_open(&node);
        register_submenu(
            self.registry,
            self.state,
            &li_id,
            node,
            self.on_toggle.clone(),
        );

        if is_open {
            let children = item
                .items
                .iter()
                .enumerate()
                .map(|(index, sub)| self.item(sub, &item_path(path, index)));
            li.child(Element::ul().role("menu").children(children))
        } else {
            li
        }
    }

    fn content(&self, item: &MenuBarItem, li_id: &str) -> Element {
        match (&item.href, &item.on_click) {
            (None, Some(on_click)) => {
                let button_id = format!("{}-button", li_id);
                self.registry
                    .register(&button_id, events::CLICK, on_click.clone());
                Element::button()
                    .id(button_id)
                    .inner_text(item.label.as_str())
            }
            (Some(href), on_click) => {
                let link_id = format!("{}-link", li_id);
                if let Some(on_click) = on_click {
                    self.registry
                        .register(&link_id, events::CLICK, on_click.clone());
                }
                let shortcut = item
                    .shortcut
                    .as_ref()
                    .map(|s| Element::span().inner_text(s.to_string()));
                Element::a()
                    .id(link_id)
                    .attr("href", href.as_str())
                    .child(Element::text(item.label.as_str()))
                    .child_opt(shortcut)
            }
            (None, None) => Element::text(item.label.as_str()),
        }
    }
}
