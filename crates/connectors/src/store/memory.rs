use crate::store::{BlobStore, StoreError, strip_bom};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory blob store for tests and local runs.
#[derive(Default)]
pub struct MemoryBlobStore {
    blobs: RwLock<HashMap<String, String>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(self, key: &str, body: &str) -> Self {
        {
            let mut blobs = self.blobs.write().unwrap();
            blobs.insert(key.to_string(), body.to_string());
        }
        self
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn get(&self, key: &str) -> Result<String, StoreError> {
        let blobs = self.blobs.read().unwrap();
        match blobs.get(key) {
            Some(body) => Ok(strip_bom(body.clone())),
            None => Err(StoreError::NotFound(key.to_string())),
        }
    }

    async fn put(&self, key: &str, body: String) -> Result<(), StoreError> {
        self.blobs.write().unwrap().insert(key.to_string(), body);
        Ok(())
    }
}
