//! Button widget.

use aerodom::{Element, generate_id};

use super::Passthrough;
use crate::handler_context::events;
use crate::{HandlerRegistry, WidgetHandlers};

/// A push button.
///
/// This is a stateless widget that creates a `<button>` element.
///
/// # Example
///
/// ```ignore
/// let ok = Button::new()
///     .label("OK")
///     .is_default()
///     .build(&registry, &handlers); // registers "on_click"
/// ```
#[derive(Clone, Debug, Default)]
pub struct Button {
    label: Option<String>,
    content: Option<Element>,
    id: Option<String>,
    is_default: bool,
    disabled: bool,
    passthrough: Passthrough,
}

impl Button {
    /// Create a new button builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the button label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Use arbitrary markup as the button content instead of a label.
    pub fn content(mut self, content: Element) -> Self {
        self.content = Some(content);
        self
    }

    /// Set the button id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Mark as the default action of a dialog (highlighted border).
    pub fn is_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Mark the button as disabled.
    ///
    /// Disabled buttons don't register handlers.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    passthrough_methods!();

    /// Build the button element.
    ///
    /// Registers the `on_click` handler if provided and not disabled.
    pub fn build(self, registry: &HandlerRegistry, handlers: &WidgetHandlers) -> Element {
        let id = self.id.unwrap_or_else(|| generate_id("button"));

        let mut elem = Element::button()
            .id(&id)
            .class_if(self.is_default, "default")
            .flag("disabled", self.disabled);
        elem = match (self.content, self.label) {
            (Some(content), _) => elem.child(content),
            (None, Some(label)) => elem.inner_text(label),
            (None, None) => elem,
        };

        // Only register handler if not disabled
        if !self.disabled
            && let Some(handler) = handlers.get("on_click")
        {
            registry.register(&id, events::CLICK, handler.clone());
        }

        self.passthrough.apply(elem)
    }
}
