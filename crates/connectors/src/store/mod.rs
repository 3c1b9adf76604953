use async_trait::async_trait;
use thiserror::Error;

mod fs;
mod memory;

pub use fs::FsBlobStore;
pub use memory::MemoryBlobStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Blob not found: {0}")]
    NotFound(String),

    #[error("Blob store I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("Blob '{0}' is not valid UTF-8")]
    InvalidEncoding(String),
}

/// Durable storage for record sources and cursor state, addressed by a
/// stable key. Record sources are read-only for the replay engine; the
/// cursor blob is the only thing it ever writes.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Full text of the blob, with any UTF-8 BOM stripped.
    async fn get(&self, key: &str) -> Result<String, StoreError>;

    /// Replaces the blob entirely. No history is kept.
    async fn put(&self, key: &str, body: String) -> Result<(), StoreError>;
}

fn strip_bom(text: String) -> String {
    match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}
