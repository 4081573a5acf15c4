use thiserror::Error;

/// Errors raised while serializing markup.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to format markup")]
    Fmt(#[from] std::fmt::Error),

    #[error("failed to write markup: {0}")]
    Io(#[from] std::io::Error),
}
