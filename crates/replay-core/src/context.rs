use crate::{config::ReplayConfig, cursor_store::CursorStore};
use connectors::{
    sink::{GraphQlSink, GraphQlSinkParams, SinkError, SinkPublisher},
    store::{BlobStore, FsBlobStore},
};
use std::sync::Arc;

/// Everything a tick needs, wired once per process and passed down
/// explicitly. The expensive pieces (HTTP client, store handles) are reused
/// across ticks within a process; nothing lives in process-wide statics.
pub struct ReplayContext {
    pub config: ReplayConfig,
    pub cursor_store: CursorStore,
    pub store: Arc<dyn BlobStore>,
    pub sink: Arc<dyn SinkPublisher>,
}

impl ReplayContext {
    pub fn new(
        config: ReplayConfig,
        store: Arc<dyn BlobStore>,
        sink: Arc<dyn SinkPublisher>,
    ) -> Self {
        let cursor_store = CursorStore::new(store.clone(), &config.cursor_key, config.io_timeout);
        ReplayContext {
            config,
            cursor_store,
            store,
            sink,
        }
    }

    /// Production wiring: filesystem blob store plus the signed GraphQL
    /// sink, both derived from the configuration.
    pub fn from_config(config: ReplayConfig) -> Result<Self, SinkError> {
        let store: Arc<dyn BlobStore> = Arc::new(FsBlobStore::new(config.data_dir.clone()));
        let sink: Arc<dyn SinkPublisher> = Arc::new(GraphQlSink::new(GraphQlSinkParams {
            endpoint: config.sink_endpoint.clone(),
            credentials: config.credentials.clone(),
            request_timeout: config.request_timeout,
        })?);
        Ok(Self::new(config, store, sink))
    }
}
