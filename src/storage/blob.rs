use crate::error::app_error::AppError;

/// Fixed key under which the current user record is persisted.
pub const USER_STORAGE_KEY: &str = "neighbourAidUser";

/// Synchronous key-value blob storage. The identity store persists a single
/// JSON object under [`USER_STORAGE_KEY`]; no versioning or migration.
pub trait BlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    fn put(&mut self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&mut self, key: &str) -> Result<(), AppError>;
}
