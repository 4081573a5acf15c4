//! Option (radio) button widget.

use std::sync::Arc;

use aerodom::Element;

use super::{Passthrough, slug};
use crate::handler_context::{EventData, events, notify};
use crate::{HandlerRegistry, WidgetHandlers};

/// One radio button of a named group.
///
/// The id is `radio-<name>-<label>` unless set explicitly. Clicking calls
/// `on_change` with the option's value as `EventData::Change`.
#[derive(Clone, Debug, Default)]
pub struct OptionButton {
    id: Option<String>,
    name: String,
    label: String,
    value: Option<String>,
    checked: Option<bool>,
    disabled: bool,
    passthrough: Passthrough,
}

impl OptionButton {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Value reported on change (defaults to the label).
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    passthrough_methods!();

    pub fn build(self, registry: &HandlerRegistry, handlers: &WidgetHandlers) -> Element {
        let id = self
            .id
            .unwrap_or_else(|| format!("radio-{}-{}", self.name, slug(&self.label)));
        let value = self.value.unwrap_or_else(|| self.label.clone());

        let mut input = Element::input("radio")
            .id(&id)
            .attr("name", self.name.as_str())
            .attr("value", value.as_str())
            .flag("disabled", self.disabled);
        if let Some(checked) = self.checked {
            input = input.flag("checked", checked);
        }

        if !self.disabled
            && let Some(on_change) = handlers.get("on_change").cloned()
        {
            registry.register(
                &id,
                events::CLICK,
                Arc::new(move |hx| {
                    notify(Some(&on_change), hx, EventData::Change { text: value.clone() });
                }),
            );
        }

        Element::div()
            .child(self.passthrough.apply(input))
            .child(Element::label().attr("for", &id).inner_text(self.label))
    }
}
