use crate::{config::ConfigError, cursor_store::CursorError};
use connectors::{sink::SinkError, source::SourceError, transform::TransformError};
use thiserror::Error;

/// Top-level errors for one replay tick. Every variant aborts the tick with
/// the cursor untouched, so the next invocation retries the same position.
/// End-of-source is deliberately absent: an exhausted source is ordinary
/// control flow, not a failure.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Cursor unavailable: {0}")]
    Cursor(#[from] CursorError),

    #[error("Record source unavailable: {0}")]
    Source(#[from] SourceError),

    #[error("Malformed row: {0}")]
    Transform(#[from] TransformError),

    #[error("Publish failed: {0}")]
    Sink(#[from] SinkError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
