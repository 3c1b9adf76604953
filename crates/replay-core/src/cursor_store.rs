use connectors::store::{BlobStore, StoreError};
use model::cursor::ReplayCursor;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum CursorError {
    /// No cursor state exists. Deliberately fatal: auto-initializing here
    /// would mask a provisioning bug with a silent restart from zero.
    #[error("No cursor state at '{0}'; provision it with an explicit init")]
    NotFound(String),

    #[error("Cursor state at '{0}' is corrupt: {1}")]
    Corrupt(String, String),

    #[error("Cursor store unavailable: {0}")]
    StoreUnavailable(String),
}

/// Read/write access to the single persisted playback position. The write
/// is the commit point of a tick; it replaces prior state entirely and
/// keeps no history.
pub struct CursorStore {
    store: Arc<dyn BlobStore>,
    key: String,
    io_timeout: Duration,
}

impl CursorStore {
    pub fn new(store: Arc<dyn BlobStore>, key: &str, io_timeout: Duration) -> Self {
        CursorStore {
            store,
            key: key.to_string(),
            io_timeout,
        }
    }

    pub async fn read(&self) -> Result<ReplayCursor, CursorError> {
        let body = tokio::time::timeout(self.io_timeout, self.store.get(&self.key))
            .await
            .map_err(|_| {
                CursorError::StoreUnavailable(format!(
                    "read of '{}' timed out after {:?}",
                    self.key, self.io_timeout
                ))
            })?
            .map_err(|err| match err {
                StoreError::NotFound(_) => CursorError::NotFound(self.key.clone()),
                other => CursorError::StoreUnavailable(other.to_string()),
            })?;

        serde_json::from_str(&body)
            .map_err(|err| CursorError::Corrupt(self.key.clone(), err.to_string()))
    }

    pub async fn write(&self, cursor: ReplayCursor) -> Result<(), CursorError> {
        let body = serde_json::to_string(&cursor)
            .map_err(|err| CursorError::Corrupt(self.key.clone(), err.to_string()))?;

        tokio::time::timeout(self.io_timeout, self.store.put(&self.key, body))
            .await
            .map_err(|_| {
                CursorError::StoreUnavailable(format!(
                    "write of '{}' timed out after {:?}",
                    self.key, self.io_timeout
                ))
            })?
            .map_err(|err| CursorError::StoreUnavailable(err.to_string()))?;
        Ok(())
    }

    /// Provisions the cursor unconditionally. This is the external
    /// initialization that `read` refuses to do on its own.
    pub async fn init(&self, position: u64) -> Result<(), CursorError> {
        self.write(ReplayCursor::new(position)).await?;
        info!(position, key = %self.key, "cursor initialized");
        Ok(())
    }
}
