//! Windows 7 styled components rendering to HTML.
//!
//! Components are builders producing `aerodom::Element` trees with the
//! markup the 7.css stylesheet expects. Interactive components keep their
//! state in a [`State`] owned by the caller and register handlers in a
//! [`HandlerRegistry`], which the host feeds with `aerodom::Event`s.

pub mod config;
pub mod controlled;
pub mod document;
pub mod error;
pub mod handler_context;
pub mod prelude;
pub mod state;
pub mod widgets;

pub use aerodom;

pub use config::RenderConfig;
pub use controlled::Controlled;
pub use document::Document;
pub use error::{Error, check_ids};
pub use handler_context::{
    EventData, Handler, HandlerContext, HandlerRegistry, WidgetHandlers, dispatch,
};
pub use state::State;
