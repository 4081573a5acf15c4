//! Checkbox widget.

use std::sync::Arc;

use aerodom::Element;

use super::{HasState, NeedsState, Passthrough, derive_id};
use crate::controlled::Controlled;
use crate::handler_context::{EventData, events, notify};
use crate::state::State;
use crate::{HandlerRegistry, WidgetHandlers};

/// A checkbox with its label.
///
/// The id is `checkbox-<label>` unless set explicitly. Clicking the input
/// flips the value and calls `on_change` with `EventData::Checked`.
///
/// # Example
///
/// ```ignore
/// let notify: State<Controlled<bool>> = State::default();
///
/// Checkbox::new()
///     .label("Enable notifications")
///     .default_checked(true)
///     .state(&notify)
///     .build(&registry, &handlers);
/// ```
#[derive(Clone, Debug)]
pub struct Checkbox<S = NeedsState> {
    state_marker: S,
    id: Option<String>,
    label: String,
    checked: Option<bool>,
    default_checked: bool,
    disabled: bool,
    passthrough: Passthrough,
}

impl Default for Checkbox<NeedsState> {
    fn default() -> Self {
        Self::new()
    }
}

impl Checkbox<NeedsState> {
    /// Create a new checkbox builder.
    pub fn new() -> Self {
        Self {
            state_marker: NeedsState,
            id: None,
            label: String::new(),
            checked: None,
            default_checked: false,
            disabled: false,
            passthrough: Passthrough::default(),
        }
    }

    /// Set the state reference. Required before calling `build()`.
    pub fn state(self, s: &State<Controlled<bool>>) -> Checkbox<HasState<'_, Controlled<bool>>> {
        Checkbox {
            state_marker: HasState(s),
            id: self.id,
            label: self.label,
            checked: self.checked,
            default_checked: self.default_checked,
            disabled: self.disabled,
            passthrough: self.passthrough,
        }
    }
}

impl<S> Checkbox<S> {
    /// Set the checkbox id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the label text.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Caller-owned checked value.
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    /// Initial value when the caller doesn't own it.
    pub fn default_checked(mut self, checked: bool) -> Self {
        self.default_checked = checked;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    passthrough_methods!();
}

impl<'a> Checkbox<HasState<'a, Controlled<bool>>> {
    /// Build the checkbox element.
    pub fn build(self, registry: &HandlerRegistry, handlers: &WidgetHandlers) -> Element {
        let state = self.state_marker.0;
        let external = self.checked;
        if state.with(|bridge| bridge.needs_sync(external.as_ref())) {
            state.update_quiet(|bridge| {
                bridge.seed(external.as_ref(), self.default_checked);
                bridge.sync(external.as_ref());
            });
        }
        let checked = state.with(|bridge| *bridge.value(external.as_ref()));

        let label = if self.label.is_empty() {
            None
        } else {
            Some(self.label.as_str())
        };
        let id = self.id.clone().unwrap_or_else(|| derive_id("checkbox", label));
        log::debug!("[Checkbox::build] id={} checked={}", id, checked);

        let input = Element::input("checkbox")
            .id(&id)
            .flag("checked", checked)
            .flag("disabled", self.disabled);

        if !self.disabled {
            let state_clone = state.clone();
            let on_change = handlers.get("on_change").cloned();
            registry.register(
                &id,
                events::CLICK,
                Arc::new(move |hx| {
                    let next = !state_clone.with(|bridge| *bridge.value(external.as_ref()));
                    state_clone.update(|bridge| bridge.change(next));
                    log::debug!("[Checkbox::on_click] checked={}", next);
                    notify(on_change.as_ref(), hx, EventData::Checked { checked: next });
                }),
            );
        }

        Element::div()
            .child(self.passthrough.apply(input))
            .child(Element::label().attr("for", &id).inner_text(self.label))
    }
}
