pub mod element;
pub mod error;
pub mod event;
pub mod render;
pub mod types;

pub use element::{
    find_all, find_by_role, find_by_tag, find_duplicate_id, find_element, generate_id, Content,
    Element,
};
pub use error::RenderError;
pub use event::{Event, Key, Modifiers, MouseButton};
pub use render::{to_html, to_html_pretty, write_html, write_io};
pub use types::*;
