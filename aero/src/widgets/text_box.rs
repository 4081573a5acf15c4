//! Single-line text input with an optional label.

use aerodom::Element;

use super::{Passthrough, derive_id};
use crate::handler_context::events;
use crate::{HandlerRegistry, WidgetHandlers};

/// `<div class="group">` with a label and a text input.
///
/// The id is `textbox-<label>` unless set explicitly. Input events are
/// forwarded to `on_change` with `EventData::Change`.
#[derive(Clone, Debug, Default)]
pub struct TextBox {
    id: Option<String>,
    label: Option<String>,
    input_type: Option<String>,
    value: Option<String>,
    placeholder: Option<String>,
    disabled: bool,
    passthrough: Passthrough,
}

impl TextBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Input type (`text` by default; `email`, `password`, ...).
    pub fn input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = Some(input_type.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
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
            .unwrap_or_else(|| derive_id("textbox", self.label.as_deref()));
        let input_type = self.input_type.as_deref().unwrap_or("text");

        let input = Element::input(input_type)
            .id(&id)
            .attr_opt("value", self.value)
            .attr_opt("placeholder", self.placeholder)
            .flag("disabled", self.disabled);

        if !self.disabled
            && let Some(handler) = handlers.get("on_change")
        {
            registry.register(&id, events::INPUT, handler.clone());
        }

        let label = self
            .label
            .map(|label| Element::label().attr("for", &id).inner_text(label));

        Element::div()
            .class("group")
            .child_opt(label)
            .child(self.passthrough.apply(input))
    }
}
