//! Prelude module for convenient imports.
//!
//! ```ignore
//! use aero::prelude::*;
//! ```

// Core types
pub use crate::config::RenderConfig;
pub use crate::controlled::Controlled;
pub use crate::document::Document;
pub use crate::error::Error;
pub use crate::handler_context::{
    EventData, Handler, HandlerContext, HandlerRegistry, WidgetHandlers, events,
};
pub use crate::state::State;

// Components
pub use crate::widgets::*;

// Markup
pub use aerodom::{Element, Event, Key, Modifiers};
