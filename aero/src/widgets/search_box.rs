//! Search input.

use aerodom::Element;

use super::{Passthrough, derive_id};
use crate::handler_context::events;
use crate::{HandlerRegistry, WidgetHandlers};

/// Search box flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchKind {
    /// Input plus a search button, wrapped in `div.searchbox`.
    #[default]
    Regular,
    /// Bare input that filters as you type.
    Instant,
}

/// A search input.
///
/// The id is `search-<placeholder>` unless set explicitly. Input events go
/// to `on_change`; the regular kind's button goes to `on_search`.
#[derive(Clone, Debug, Default)]
pub struct SearchBox {
    id: Option<String>,
    kind: SearchKind,
    placeholder: Option<String>,
    value: Option<String>,
    passthrough: Passthrough,
}

impl SearchBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn kind(mut self, kind: SearchKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn instant(self) -> Self {
        self.kind(SearchKind::Instant)
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    passthrough_methods!();

    pub fn build(self, registry: &HandlerRegistry, handlers: &WidgetHandlers) -> Element {
        let id = self
            .id
            .unwrap_or_else(|| derive_id("search", self.placeholder.as_deref()));

        let input = self.passthrough.apply(
            Element::input("search")
                .id(&id)
                .attr_opt("placeholder", self.placeholder)
                .attr_opt("value", self.value),
        );
        if let Some(handler) = handlers.get("on_change") {
            registry.register(&id, events::INPUT, handler.clone());
        }

        match self.kind {
            SearchKind::Instant => input,
            SearchKind::Regular => {
                let button_id = format!("{}-button", id);
                if let Some(handler) = handlers.get("on_search") {
                    registry.register(&button_id, events::CLICK, handler.clone());
                }
                Element::div().class("searchbox").child(input).child(
                    Element::button()
                        .id(button_id)
                        .aria("label", "search"),
                )
            }
        }
    }
}
