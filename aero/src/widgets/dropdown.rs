//! Native select with an optional label.

use aerodom::Element;

use super::{Passthrough, derive_id};
use crate::handler_context::events;
use crate::{HandlerRegistry, WidgetHandlers};

/// One `<option>` of a dropdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl DropdownOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// `<select>` with options.
///
/// The id is `dropdown-<label>` unless set explicitly. The browser owns the
/// current choice; `value` only marks the matching option `selected`. Input
/// events are forwarded to `on_change`.
#[derive(Clone, Debug, Default)]
pub struct Dropdown {
    id: Option<String>,
    label: Option<String>,
    options: Vec<DropdownOption>,
    value: Option<String>,
    disabled: bool,
    passthrough: Passthrough,
}

impl Dropdown {
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

    pub fn options(mut self, options: impl IntoIterator<Item = DropdownOption>) -> Self {
        self.options = options.into_iter().collect();
        self
    }

    pub fn option(mut self, option: DropdownOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
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
            .unwrap_or_else(|| derive_id("dropdown", self.label.as_deref()));

        let value = self.value;
        let options = self.options.into_iter().map(|option| {
            let selected = value.as_deref() == Some(option.value.as_str());
            Element::option()
                .attr("value", option.value)
                .flag("disabled", option.disabled)
                .flag("selected", selected)
                .inner_text(option.label)
        });

        let select = Element::select()
            .id(&id)
            .flag("disabled", self.disabled)
            .children(options);

        if !self.disabled
            && let Some(handler) = handlers.get("on_change")
        {
            registry.register(&id, events::INPUT, handler.clone());
        }

        let label = self
            .label
            .map(|label| Element::label().attr("for", &id).inner_text(label));

        Element::div()
            .child_opt(label)
            .child(self.passthrough.apply(select))
    }
}
