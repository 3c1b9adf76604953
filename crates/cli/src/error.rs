use connectors::sink::SinkError;
use replay_core::{config::ConfigError, cursor_store::CursorError, error::ReplayError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to set up the sink: {0}")]
    SinkSetup(#[from] SinkError),

    #[error("Cursor error: {0}")]
    Cursor(#[from] CursorError),

    #[error("Tick failed: {0}")]
    Replay(#[from] ReplayError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}
