//! Collapse widget - a single expandable section.

use std::sync::Arc;

use aerodom::{Element, generate_id};

use super::disclosure::Disclosure;
use super::{HasState, NeedsState, Passthrough};
use crate::handler_context::{EventData, events, notify};
use crate::state::State;
use crate::{HandlerRegistry, WidgetHandlers};

/// A collapse builder: `<details>` with a `<summary>`.
///
/// Shows a summary that can be clicked to expand/collapse the content.
/// Several collapses may share one `Disclosure` state; each is keyed by its
/// id.
#[derive(Clone, Debug)]
pub struct Collapse<S = NeedsState> {
    state_marker: S,
    id: Option<String>,
    summary: Element,
    default_open: bool,
    children: Vec<Element>,
    passthrough: Passthrough,
}

impl Default for Collapse<NeedsState> {
    fn default() -> Self {
        Self::new()
    }
}

impl Collapse<NeedsState> {
    /// Create a new collapse builder.
    pub fn new() -> Self {
        Self {
            state_marker: NeedsState,
            id: None,
            summary: Element::text(""),
            default_open: false,
            children: Vec::new(),
            passthrough: Passthrough::default(),
        }
    }

    /// Set the state reference. Required before calling `build()`.
    pub fn state(
        self,
        s: &State<Disclosure<String>>,
    ) -> Collapse<HasState<'_, Disclosure<String>>> {
        Collapse {
            state_marker: HasState(s),
            id: self.id,
            summary: self.summary,
            default_open: self.default_open,
            children: self.children,
            passthrough: self.passthrough,
        }
    }
}

impl<S> Collapse<S> {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the summary text.
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Element::text(summary);
        self
    }

    /// Use markup as the summary.
    pub fn summary_content(mut self, summary: Element) -> Self {
        self.summary = summary;
        self
    }

    pub fn default_open(mut self, open: bool) -> Self {
        self.default_open = open;
        self
    }

    pub fn children(mut self, children: Vec<Element>) -> Self {
        self.children = children;
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    passthrough_methods!();
}

impl<'a> Collapse<HasState<'a, Disclosure<String>>> {
    /// Build the collapse element.
    pub fn build(self, registry: &HandlerRegistry, handlers: &WidgetHandlers) -> Element {
        let state = self.state_marker.0;
        let id = self.id.clone().unwrap_or_else(|| generate_id("collapse"));

        if !state.with(|d| d.contains(&id)) {
            state.update_quiet(|d| d.register(id.clone(), self.default_open));
        }
        let open = state.with(|d| d.is_open(&id));

        let summary_id = format!("{}-summary", id);
        let state_clone = state.clone();
        let node = id.clone();
        let on_toggle = handlers.get("on_toggle").cloned();
        registry.register(
            &summary_id,
            events::CLICK,
            Arc::new(move |hx| {
                let mut now_open = false;
                state_clone.update(|d| now_open = d.toggle(node.clone()));
                notify(on_toggle.as_ref(), hx, EventData::Toggle { open: now_open });
            }),
        );

        let details = Element::details()
            .id(&id)
            .flag("open", open)
            .child(Element::summary().id(summary_id).child(self.summary))
            .children(self.children);

        self.passthrough.apply(details)
    }
}
