//! Tabs widget - a tab strip with one visible panel.

use std::sync::Arc;

use aerodom::Element;

use super::{HasState, NeedsState, Passthrough};
use crate::controlled::Controlled;
use crate::handler_context::{EventData, events, notify};
use crate::state::State;
use crate::{HandlerRegistry, WidgetHandlers};

/// One tab: its button label and panel content.
///
/// The id names the panel; the button is `<id>-tab`.
#[derive(Clone, Debug)]
pub struct Tab {
    pub id: String,
    pub label: String,
    pub content: Element,
    pub disabled: bool,
}

impl Tab {
    pub fn new(id: impl Into<String>, label: impl Into<String>, content: Element) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            content,
            disabled: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// A tabs builder.
///
/// The active tab defaults to the first enabled tab. Clicking an enabled tab
/// activates it and calls `on_change` with the tab id; clicking a disabled
/// tab does nothing.
#[derive(Clone, Debug)]
pub struct Tabs<S = NeedsState> {
    state_marker: S,
    tabs: Vec<Tab>,
    active: Option<String>,
    aria_label: String,
    passthrough: Passthrough,
}

impl Default for Tabs<NeedsState> {
    fn default() -> Self {
        Self::new()
    }
}

impl Tabs<NeedsState> {
    pub fn new() -> Self {
        Self {
            state_marker: NeedsState,
            tabs: Vec::new(),
            active: None,
            aria_label: "Tabs".to_string(),
            passthrough: Passthrough::default(),
        }
    }

    /// Set the state reference. Required before calling `build()`.
    pub fn state(self, s: &State<Controlled<String>>) -> Tabs<HasState<'_, Controlled<String>>> {
        Tabs {
            state_marker: HasState(s),
            tabs: self.tabs,
            active: self.active,
            aria_label: self.aria_label,
            passthrough: self.passthrough,
        }
    }
}

impl<S> Tabs<S> {
    pub fn tabs(mut self, tabs: Vec<Tab>) -> Self {
        self.tabs = tabs;
        self
    }

    pub fn tab(mut self, tab: Tab) -> Self {
        self.tabs.push(tab);
        self
    }

    /// Caller-owned active tab id.
    pub fn active(mut self, id: impl Into<String>) -> Self {
        self.active = Some(id.into());
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = label.into();
        self
    }

    passthrough_methods!();
}

impl<'a> Tabs<HasState<'a, Controlled<String>>> {
    /// Build the tabs element.
    pub fn build(self, registry: &HandlerRegistry, handlers: &WidgetHandlers) -> Element {
        let state = self.state_marker.0;
        let external = self.active.as_ref();
        if state.with(|bridge| bridge.needs_sync(external)) {
            let default = self
                .tabs
                .iter()
                .find(|t| !t.disabled)
                .or(self.tabs.first())
                .map(|t| t.id.clone())
                .unwrap_or_default();
            state.update_quiet(|bridge| {
                bridge.seed(external, default);
                bridge.sync(external);
            });
        }
        let active = state.with(|bridge| bridge.value(external).clone());
        log::debug!("[Tabs::build] tabs={} active={}", self.tabs.len(), active);

        let on_change = handlers.get("on_change").cloned();

        let mut strip = Element::new("menu")
            .role("tablist")
            .aria("label", self.aria_label.as_str());
        let mut panels = Vec::with_capacity(self.tabs.len());

        for tab in self.tabs {
            let button_id = format!("{}-tab", tab.id);
            let selected = tab.id == active;

            if !tab.disabled {
                let state_clone = state.clone();
                let tab_id = tab.id.clone();
                let on_change = on_change.clone();
                registry.register(
                    &button_id,
                    events::CLICK,
                    Arc::new(move |hx| {
                        state_clone.update(|bridge| bridge.change(tab_id.clone()));
                        log::debug!("[Tabs::on_click] {}", tab_id);
                        notify(on_change.as_ref(), hx, EventData::Change { text: tab_id.clone() });
                    }),
                );
            }

            strip = strip.child(
                Element::button()
                    .id(button_id)
                    .role("tab")
                    .aria("controls", tab.id.as_str())
                    .aria_bool("selected", selected)
                    .flag("disabled", tab.disabled)
                    .inner_text(tab.label),
            );
            panels.push(
                Element::new("article")
                    .role("tabpanel")
                    .id(tab.id)
                    .flag("hidden", !selected)
                    .child(tab.content),
            );
        }

        let section = Element::new("section")
            .class("tabs")
            .child(strip)
            .children(panels);

        self.passthrough.apply(section)
    }
}
