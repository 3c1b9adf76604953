use async_trait::async_trait;
use model::event::TelemetryEvent;
use thiserror::Error;

mod graphql;
mod sign;

pub use graphql::{GraphQlSink, GraphQlSinkParams};
pub use sign::{SignedHeaders, SigningCredentials, sign_post};

/// Publish-time failures. All three abort the current tick: retrying a
/// single event inside a partially emitted multi-source tick would risk
/// duplicate emission for sources already published.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Sink rejected the request credentials: {0}")]
    Auth(String),

    #[error("Network failure reaching the sink: {0}")]
    Network(String),

    #[error("Sink rejected the event: {0}")]
    Rejected(String),
}

/// Hands one telemetry event to the downstream API as a durable
/// record-creation request. Ownership of the event's data transfers
/// downstream on success.
#[async_trait]
pub trait SinkPublisher: Send + Sync {
    async fn publish(&self, event: &TelemetryEvent) -> Result<(), SinkError>;
}
