use crate::error::app_error::AppError;
use crate::storage::blob::BlobStore;
use std::collections::HashMap;

/// In-memory blob store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.blobs.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), AppError> {
        self.blobs.remove(key);
        Ok(())
    }
}

impl MemoryStore {
    /// Seed a blob directly, bypassing the trait. Used by tests to stage
    /// pre-existing (including corrupt) persisted state.
    pub fn with_blob(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.blobs.insert(key.to_string(), value.to_string());
        store
    }
}
