pub mod blob;
pub mod file;
pub mod memory;

pub use blob::{BlobStore, USER_STORAGE_KEY};
pub use file::FileStore;
pub use memory::MemoryStore;
