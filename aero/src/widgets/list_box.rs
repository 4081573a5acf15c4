//! List box widget - a selectable list of text options.

use std::sync::Arc;

use aerodom::{Element, generate_id};

use super::selection::{SelectModifier, Selection, SelectionMode};
use super::{HasState, NeedsState, Passthrough};
use crate::controlled::Controlled;
use crate::handler_context::{EventData, events, notify};
use crate::state::State;
use crate::{HandlerRegistry, WidgetHandlers};

/// State of a list box: the selected item texts, in selection order.
pub type ListBoxState = Controlled<Vec<String>>;

/// One option of a list box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListBoxItem {
    pub text: String,
    pub disabled: bool,
}

impl ListBoxItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

impl From<&str> for ListBoxItem {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for ListBoxItem {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// A list box builder.
///
/// Items are identified by their text. A plain click replaces the selection,
/// Ctrl/Meta-click toggles and Shift-click extends a range (multi mode only).
/// `click_toggles` makes a plain click toggle in multi mode instead.
///
/// Each change calls `on_change` with `EventData::Selection`.
///
/// # Example
///
/// ```ignore
/// ListBox::new()
///     .items(["Facebook", "Amazon", "Apple"])
///     .multiple(true)
///     .default_value(["Apple"])
///     .state(&state)
///     .build(&registry, &handlers);
/// ```
#[derive(Clone, Debug)]
pub struct ListBox<S = NeedsState> {
    state_marker: S,
    id: Option<String>,
    items: Vec<ListBoxItem>,
    multiple: bool,
    click_toggles: bool,
    show_shadow: bool,
    value: Option<Vec<String>>,
    default_value: Vec<String>,
    passthrough: Passthrough,
}

impl Default for ListBox<NeedsState> {
    fn default() -> Self {
        Self::new()
    }
}

impl ListBox<NeedsState> {
    /// Create a new list box builder.
    pub fn new() -> Self {
        Self {
            state_marker: NeedsState,
            id: None,
            items: Vec::new(),
            multiple: false,
            click_toggles: false,
            show_shadow: true,
            value: None,
            default_value: Vec::new(),
            passthrough: Passthrough::default(),
        }
    }

    /// Set the state reference. Required before calling `build()`.
    pub fn state(self, s: &State<ListBoxState>) -> ListBox<HasState<'_, ListBoxState>> {
        ListBox {
            state_marker: HasState(s),
            id: self.id,
            items: self.items,
            multiple: self.multiple,
            click_toggles: self.click_toggles,
            show_shadow: self.show_shadow,
            value: self.value,
            default_value: self.default_value,
            passthrough: self.passthrough,
        }
    }
}

impl<S> ListBox<S> {
    /// Set the list id. Option ids are `<id>-option-<index>`.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn items<I>(mut self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ListBoxItem>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn item(mut self, item: impl Into<ListBoxItem>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Allow more than one selected item.
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// In multi mode, let a plain click toggle like Ctrl-click.
    pub fn click_toggles(mut self, click_toggles: bool) -> Self {
        self.click_toggles = click_toggles;
        self
    }

    pub fn show_shadow(mut self, show: bool) -> Self {
        self.show_shadow = show;
        self
    }

    /// Caller-owned selection.
    pub fn value<I, T>(mut self, value: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.value = Some(value.into_iter().map(Into::into).collect());
        self
    }

    /// Initial selection when the caller doesn't own it.
    pub fn default_value<I, T>(mut self, value: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.default_value = value.into_iter().map(Into::into).collect();
        self
    }

    passthrough_methods!();
}

impl<'a> ListBox<HasState<'a, ListBoxState>> {
    /// Build the list box element.
    pub fn build(self, registry: &HandlerRegistry, handlers: &WidgetHandlers) -> Element {
        let state = self.state_marker.0;
        let external = self.value.as_ref();
        if state.with(|bridge| bridge.needs_sync(external)) {
            state.update_quiet(|bridge| {
                bridge.seed(external, self.default_value.clone());
                bridge.sync(external);
            });
        }
        let selected = state.with(|bridge| bridge.value(external).clone());

        let id = self.id.clone().unwrap_or_else(|| generate_id("listbox"));
        log::debug!(
            "[ListBox::build] id={} items={} selected={:?}",
            id,
            self.items.len(),
            selected
        );

        let mode = if self.multiple {
            SelectionMode::Multi
        } else {
            SelectionMode::Single
        };
        let order: Arc<Vec<String>> = Arc::new(self.items.iter().map(|i| i.text.clone()).collect());
        let disabled: Arc<Vec<String>> = Arc::new(
            self.items
                .iter()
                .filter(|i| i.disabled)
                .map(|i| i.text.clone())
                .collect(),
        );
        let on_change = handlers.get("on_change").cloned();

        let mut list = Element::ul()
            .id(&id)
            .role("listbox")
            .class("has-hover")
            .class_if(self.show_shadow, "has-shadow")
            .aria_bool("multiselectable", self.multiple);

        for (index, item) in self.items.iter().enumerate() {
            let option_id = format!("{}-option-{}", id, index);
            let is_selected = selected.contains(&item.text);

            let mut option = Element::li()
                .id(&option_id)
                .role("option")
                .aria_bool("selected", is_selected)
                .inner_text(item.text.as_str());
            if item.disabled {
                option = option.aria_bool("disabled", true).class("disabled");
            } else {
                let state_clone = state.clone();
                let key = item.text.clone();
                let external = self.value.clone();
                let order = Arc::clone(&order);
                let disabled = Arc::clone(&disabled);
                let on_change = on_change.clone();
                let click_toggles = self.click_toggles;
                registry.register(
                    &option_id,
                    events::CLICK,
                    Arc::new(move |hx| {
                        let mut modifier = SelectModifier::from_modifiers(hx.event().modifiers());
                        if click_toggles && modifier == SelectModifier::None {
                            modifier = SelectModifier::Toggle;
                        }

                        let current =
                            state_clone.with(|bridge| bridge.value(external.as_ref()).clone());
                        let mut selection = Selection::new(mode).with_selected(current);
                        let Some(change) =
                            selection.select(key.clone(), modifier, &order, |k| disabled.contains(k))
                        else {
                            return;
                        };
                        log::debug!("[ListBox::on_click] {:?} -> {:?}", modifier, change);
                        state_clone.update(|bridge| bridge.change(selection.selected().to_vec()));
                        notify(on_change.as_ref(), hx, EventData::Selection(change));
                    }),
                );
            }
            list = list.child(option);
        }

        self.passthrough.apply(list)
    }
}
