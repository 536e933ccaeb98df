use crate::error::app_error::AppError;
use crate::storage::blob::BlobStore;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-backed blob store: each key maps to `<dir>/<key>.json`.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, AppError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| AppError::storage(format!("Failed to create storage directory {}", dir.display()), e))?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl BlobStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!("Failed to read blob {key}"), e)),
        }
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        fs::write(self.path_for(key), value).map_err(|e| AppError::storage(format!("Failed to write blob {key}"), e))
    }

    fn remove(&mut self, key: &str) -> Result<(), AppError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::storage(format!("Failed to remove blob {key}"), e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    static DIR_SEQ: AtomicU32 = AtomicU32::new(0);

    fn temp_store() -> (FileStore, PathBuf) {
        let dir = std::env::temp_dir().join(format!(
            "neighbour-aid-test-{}-{}",
            std::process::id(),
            DIR_SEQ.fetch_add(1, Ordering::SeqCst)
        ));
        (FileStore::new(&dir).unwrap(), dir)
    }

    #[test]
    fn round_trips_a_blob() {
        let (mut store, dir) = temp_store();
        assert_eq!(store.get("k").unwrap(), None);
        store.put("k", "{\"a\":1}").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("{\"a\":1}"));
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn remove_of_missing_key_is_a_no_op() {
        let (mut store, dir) = temp_store();
        store.remove("missing").unwrap();
        fs::remove_dir_all(dir).unwrap();
    }
}
