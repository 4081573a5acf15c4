//! Handler plumbing between components and the host.
//!
//! This module provides:
//! - `Handler`: closure type for handlers
//! - `WidgetHandlers`: named callbacks handed to a component builder
//! - `HandlerRegistry`: stores element event handlers keyed by (element_id, event_name)
//! - `HandlerContext` / `EventData`: what a handler receives
//! - `dispatch`: routes a host `aerodom::Event` to the registered handler

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use aerodom::{Event, Key, Modifiers};

use crate::widgets::selection::SelectionChange;
use crate::widgets::sort::SortDirection;

// =============================================================================
// Handler Type
// =============================================================================

/// A handler closure that receives a HandlerContext.
pub type Handler = Arc<dyn Fn(&HandlerContext) + Send + Sync>;

/// Map of handler names to handlers, used for passing callbacks to widgets.
///
/// Standard handler names:
/// - `"on_click"` - button or link activation
/// - `"on_change"` - value changed (checkbox, text, dropdown, tabs, list box)
/// - `"on_selection_change"` - table row selection changed
/// - `"on_sort"` - table sort column or direction changed
/// - `"on_toggle"` - disclosure node opened or closed
/// - `"on_close"`, `"on_minimize"`, `"on_maximize"`, `"on_help"` - window controls
pub type WidgetHandlers = HashMap<&'static str, Handler>;

/// Element event names used as the second half of a registry key.
pub mod events {
    pub const CLICK: &str = "on_click";
    pub const KEY: &str = "on_key";
    pub const POINTER_ENTER: &str = "on_pointer_enter";
    pub const POINTER_LEAVE: &str = "on_pointer_leave";
    pub const INPUT: &str = "on_input";
    pub const FOCUS: &str = "on_focus";
    pub const BLUR: &str = "on_blur";
}

// =============================================================================
// Event Data
// =============================================================================

/// Event-specific data passed to handlers via HandlerContext.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EventData {
    /// No event data.
    #[default]
    None,
    /// Pointer click with the modifiers that were held.
    Click { modifiers: Modifiers },
    /// Key press.
    Key { key: Key, modifiers: Modifiers },
    /// Text value changed (inputs, dropdowns, radio values, active tab).
    Change {
        /// The new text value.
        text: String,
    },
    /// Checkbox state changed.
    Checked { checked: bool },
    /// Selection of a list box or list view changed.
    Selection(SelectionChange<String>),
    /// Sort column or direction changed.
    Sort {
        key: String,
        direction: SortDirection,
    },
    /// A disclosure node opened or closed.
    Toggle { open: bool },
}

impl EventData {
    /// Get the changed text from a Change event.
    pub fn text(&self) -> Option<&str> {
        match self {
            EventData::Change { text } => Some(text),
            _ => None,
        }
    }

    /// Get the new checked state from a Checked event.
    pub fn checked(&self) -> Option<bool> {
        match self {
            EventData::Checked { checked } => Some(*checked),
            _ => None,
        }
    }

    /// Get the selection from a Selection event.
    pub fn selection(&self) -> Option<&SelectionChange<String>> {
        match self {
            EventData::Selection(change) => Some(change),
            _ => None,
        }
    }

    /// Get the sort column and direction from a Sort event.
    pub fn sort(&self) -> Option<(&str, SortDirection)> {
        match self {
            EventData::Sort { key, direction } => Some((key, *direction)),
            _ => None,
        }
    }

    /// Modifiers held during a Click or Key event.
    pub fn modifiers(&self) -> Modifiers {
        match self {
            EventData::Click { modifiers } | EventData::Key { modifiers, .. } => *modifiers,
            _ => Modifiers::default(),
        }
    }

    /// The key of a Key event.
    pub fn key(&self) -> Option<Key> {
        match self {
            EventData::Key { key, .. } => Some(*key),
            _ => None,
        }
    }
}

// =============================================================================
// HandlerRegistry
// =============================================================================

/// Registry for element event handlers.
///
/// Maps (element_id, event_name) to handler closures. Registering the same
/// pair twice replaces the earlier handler, so two elements that share an id
/// share the handler of whichever was built last. Call `clear` before a
/// rebuild so handlers from the previous build don't persist.
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    handlers: Arc<RwLock<HashMap<(String, String), Handler>>>,
}

impl HandlerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an element event.
    ///
    /// # Arguments
    /// - `element_id`: The element's unique ID (from Element.id)
    /// - `event`: The event name (e.g., "on_click", "on_key")
    /// - `handler`: The handler closure
    pub fn register(&self, element_id: &str, event: &str, handler: Handler) {
        if let Ok(mut handlers) = self.handlers.write() {
            let key = (element_id.to_string(), event.to_string());
            if handlers.insert(key, handler).is_some() {
                log::debug!(
                    "[HandlerRegistry::register] replaced {} handler for '{}'",
                    event,
                    element_id
                );
            }
        }
    }

    /// Get a handler for an element event.
    pub fn get(&self, element_id: &str, event: &str) -> Option<Handler> {
        self.handlers
            .read()
            .ok()?
            .get(&(element_id.to_string(), event.to_string()))
            .cloned()
    }

    /// Clear all handlers.
    pub fn clear(&self) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.clear();
        }
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.handlers
            .read()
            .map(|h| h.is_empty())
            .unwrap_or(true)
    }

    /// Get the number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.read().map(|h| h.len()).unwrap_or(0)
    }

    /// Route a host event to the handler registered for its target.
    ///
    /// The handler runs synchronously before this returns. Returns false when
    /// nothing is registered for the target and event kind.
    pub fn dispatch(&self, event: &Event) -> bool {
        let name = event_name(event);
        let target = event.target();
        let Some(handler) = self.get(target, name) else {
            log::trace!("[HandlerRegistry::dispatch] no {} handler for '{}'", name, target);
            return false;
        };

        log::debug!("[HandlerRegistry::dispatch] {} on '{}'", name, target);
        let hx = HandlerContext::new(target, event_data(event));
        handler(&hx);
        true
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("HandlerRegistry")
            .field("handler_count", &count)
            .finish()
    }
}

/// Route a host event through `registry`. See [`HandlerRegistry::dispatch`].
pub fn dispatch(registry: &HandlerRegistry, event: &Event) -> bool {
    registry.dispatch(event)
}

/// Registry event name for a host event.
pub fn event_name(event: &Event) -> &'static str {
    match event {
        Event::Click { .. } => events::CLICK,
        Event::Key { .. } => events::KEY,
        Event::PointerEnter { .. } => events::POINTER_ENTER,
        Event::PointerLeave { .. } => events::POINTER_LEAVE,
        Event::Input { .. } => events::INPUT,
        Event::Focus { .. } => events::FOCUS,
        Event::Blur { .. } => events::BLUR,
    }
}

fn event_data(event: &Event) -> EventData {
    match event {
        Event::Click { modifiers, .. } => EventData::Click {
            modifiers: *modifiers,
        },
        Event::Key { key, modifiers, .. } => EventData::Key {
            key: *key,
            modifiers: *modifiers,
        },
        Event::Input { value, .. } => EventData::Change {
            text: value.clone(),
        },
        Event::PointerEnter { .. }
        | Event::PointerLeave { .. }
        | Event::Focus { .. }
        | Event::Blur { .. } => EventData::None,
    }
}

// =============================================================================
// HandlerContext
// =============================================================================

/// Context passed to every handler.
///
/// Carries the id of the element the event happened on and the event data.
/// Components that forward to a caller callback build a new context holding
/// the component-level result (the new selection, the new text, ...).
#[derive(Debug, Clone, Default)]
pub struct HandlerContext {
    target: String,
    event_data: EventData,
}

impl HandlerContext {
    pub fn new(target: impl Into<String>, event_data: EventData) -> Self {
        Self {
            target: target.into(),
            event_data,
        }
    }

    /// A context for the same target carrying different data.
    pub fn with_event(&self, event_data: EventData) -> Self {
        Self {
            target: self.target.clone(),
            event_data,
        }
    }

    /// Id of the element the event happened on.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Get the event data.
    pub fn event(&self) -> &EventData {
        &self.event_data
    }
}

/// Call the named caller callback, if any, with `data`.
pub(crate) fn notify(
    handler: Option<&Handler>,
    hx: &HandlerContext,
    data: EventData,
) {
    if let Some(handler) = handler {
        handler(&hx.with_event(data));
    }
}
