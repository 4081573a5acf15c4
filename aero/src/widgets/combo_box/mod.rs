//! Combo box widget - a text input with a filtered option list.

mod filter;

pub use filter::{FilterMatch, fuzzy_filter, substring_filter};

use std::sync::Arc;

use aerodom::{Element, Key};

use super::{HasState, NeedsState, Passthrough};
use crate::controlled::Controlled;
use crate::handler_context::{EventData, events, notify};
use crate::state::State;
use crate::{HandlerRegistry, WidgetHandlers};

/// State of a combo box: the input text and whether the list is open.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComboBoxState {
    pub text: Controlled<String>,
    pub open: bool,
}

impl ComboBoxState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Close the option list. Hosts call this on an outside click.
    pub fn dismiss(&mut self) {
        self.open = false;
    }
}

/// A combo box builder.
///
/// Typing updates the text, opens the list and calls `on_change` with
/// `EventData::Change`. The list shows the options matching the text
/// (case-insensitive substring, or fuzzy when enabled). Clicking an option
/// takes its text and closes the list. Escape on the input closes it too.
///
/// The listbox id is required. Derived ids: `<id>-input`, `<id>-toggle`,
/// `<id>-option-<index>` (index within the shown list).
///
/// # Example
///
/// ```ignore
/// ComboBox::new("fruits")
///     .options(["Apple", "Banana", "Cherry"])
///     .default_value("Ap")
///     .state(&state)
///     .build(&registry, &handlers);
/// ```
#[derive(Clone, Debug)]
pub struct ComboBox<S = NeedsState> {
    state_marker: S,
    listbox_id: String,
    options: Vec<String>,
    value: Option<String>,
    default_value: String,
    placeholder: Option<String>,
    fuzzy: bool,
    passthrough: Passthrough,
}

impl ComboBox<NeedsState> {
    /// Create a new combo box builder owning the listbox `listbox_id`.
    pub fn new(listbox_id: impl Into<String>) -> Self {
        Self {
            state_marker: NeedsState,
            listbox_id: listbox_id.into(),
            options: Vec::new(),
            value: None,
            default_value: String::new(),
            placeholder: None,
            fuzzy: false,
            passthrough: Passthrough::default(),
        }
    }

    /// Set the state reference. Required before calling `build()`.
    pub fn state(self, s: &State<ComboBoxState>) -> ComboBox<HasState<'_, ComboBoxState>> {
        ComboBox {
            state_marker: HasState(s),
            listbox_id: self.listbox_id,
            options: self.options,
            value: self.value,
            default_value: self.default_value,
            placeholder: self.placeholder,
            fuzzy: self.fuzzy,
            passthrough: self.passthrough,
        }
    }
}

impl<S> ComboBox<S> {
    pub fn options<I, T>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn option(mut self, option: impl Into<String>) -> Self {
        self.options.push(option.into());
        self
    }

    /// Caller-owned input text.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Initial text when the caller doesn't own it.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Rank options with a fuzzy matcher instead of substring search.
    pub fn fuzzy(mut self, fuzzy: bool) -> Self {
        self.fuzzy = fuzzy;
        self
    }

    passthrough_methods!();
}

impl<'a> ComboBox<HasState<'a, ComboBoxState>> {
    /// Build the combo box element.
    pub fn build(self, registry: &HandlerRegistry, handlers: &WidgetHandlers) -> Element {
        let state = self.state_marker.0;
        let external = self.value.as_ref();
        if state.with(|s| s.text.needs_sync(external)) {
            state.update_quiet(|s| {
                s.text.seed(external, self.default_value.clone());
                s.text.sync(external);
            });
        }
        let (text, open) = state.with(|s| (s.text.value(external).clone(), s.open));

        let lb = &self.listbox_id;
        let input_id = format!("{}-input", lb);
        let toggle_id = format!("{}-toggle", lb);

        let matches = if self.fuzzy {
            fuzzy_filter(&text, &self.options)
        } else {
            substring_filter(&text, &self.options)
        };
        log::debug!(
            "[ComboBox::build] id={} text={:?} open={} matches={}",
            lb,
            text,
            open,
            matches.len()
        );

        let on_change = handlers.get("on_change").cloned();

        // Typing
        let state_clone = state.clone();
        let on_input = on_change.clone();
        registry.register(
            &input_id,
            events::INPUT,
            Arc::new(move |hx| {
                let typed = hx.event().text().unwrap_or_default().to_string();
                state_clone.update(|s| {
                    s.text.change(typed.clone());
                    s.open = true;
                });
                notify(on_input.as_ref(), hx, EventData::Change { text: typed });
            }),
        );

        // Escape closes
        let state_clone = state.clone();
        registry.register(
            &input_id,
            events::KEY,
            Arc::new(move |hx| {
                if hx.event().key() == Some(Key::Escape) {
                    state_clone.update(ComboBoxState::dismiss);
                }
            }),
        );

        let state_clone = state.clone();
        registry.register(
            &toggle_id,
            events::CLICK,
            Arc::new(move |_hx| {
                state_clone.update(|s| s.open = !s.open);
            }),
        );

        let input = Element::input("text")
            .id(&input_id)
            .role("combobox")
            .aria("owns", lb.as_str())
            .aria_bool("expanded", open)
            .aria("autocomplete", "list")
            .attr("value", text.as_str())
            .attr_opt("placeholder", self.placeholder.clone());

        let toggle = Element::button().id(&toggle_id).aria(
            "label",
            if open { "Close options" } else { "Open options" },
        );

        let list = (open && !matches.is_empty()).then(|| {
            let options = matches.iter().enumerate().map(|(position, found)| {
                let option_text = self.options[found.index].clone();
                let option_id = format!("{}-option-{}", lb, position);

                let state_clone = state.clone();
                let picked = option_text.clone();
                let on_pick = on_change.clone();
                registry.register(
                    &option_id,
                    events::CLICK,
                    Arc::new(move |hx| {
                        state_clone.update(|s| {
                            s.text.change(picked.clone());
                            s.open = false;
                        });
                        log::debug!("[ComboBox::on_pick] {}", picked);
                        notify(on_pick.as_ref(), hx, EventData::Change { text: picked.clone() });
                    }),
                );

                Element::li()
                    .id(option_id)
                    .role("option")
                    .aria_bool("selected", option_text == text)
                    .inner_text(option_text)
            });
            Element::ul().role("listbox").id(lb.as_str()).children(options)
        });

        let combo = Element::div()
            .class("combobox")
            .child(input)
            .child(toggle)
            .child_opt(list);

        self.passthrough.apply(combo)
    }
}
