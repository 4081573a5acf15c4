//! Library error type.

use std::io;

use aerodom::{Element, RenderError};
use thiserror::Error;

/// Errors from the fallible edges of the library.
///
/// Building components never fails; only loading configuration, writing
/// markup out and the opt-in id check do.
#[derive(Debug, Error)]
pub enum Error {
    /// Render configuration could not be parsed.
    #[error("Invalid render config: {0}")]
    Config(#[from] serde_json::Error),

    /// Writing rendered markup failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Formatting into the output buffer failed.
    #[error("Format error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// Two elements in one tree share an id.
    #[error("Duplicate element id '{0}'")]
    DuplicateId(String),
}

impl From<RenderError> for Error {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::Fmt(err) => Error::Fmt(err),
            RenderError::Io(err) => Error::Io(err),
        }
    }
}

/// Check that no id appears twice in `root`.
///
/// Ids derived from labels collide when two components share a label; the
/// handler of the later one wins. Hosts that care call this after building.
pub fn check_ids(root: &Element) -> Result<(), Error> {
    match aerodom::find_duplicate_id(root) {
        Some(id) => {
            log::warn!("[check_ids] duplicate id '{}'", id);
            Err(Error::DuplicateId(id))
        }
        None => Ok(()),
    }
}
