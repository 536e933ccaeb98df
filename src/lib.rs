pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod storage;
pub mod store;
mod util;

#[cfg(test)]
pub mod test_utils;

pub use config::Config;
pub use error::app_error::AppError;

use crate::storage::file::FileStore;
use crate::store::collection::CollectionStore;
use crate::store::directory::NeighbourDirectory;
use crate::store::identity::IdentityStore;
use tracing_subscriber::EnvFilter;

pub fn init_tracing(log_level: &str, json_format: bool) {
    // RUST_LOG takes precedence for fine-grained per-module control, e.g.
    // RUST_LOG=info,neighbour_aid::store=debug
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    if json_format {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

/// The application's entire mutable state, constructed once at process start
/// and handed to every consumer by reference. There is no ambient global
/// state to look up.
pub struct App {
    pub identity: IdentityStore<FileStore>,
    pub collections: CollectionStore,
    pub directory: NeighbourDirectory,
}

impl App {
    /// Build the file-backed identity store, the seeded collection store,
    /// and the neighbour directory. Only the identity record survives a
    /// restart; requests, offers, and messages reset to the seed dataset.
    pub fn bootstrap(config: &Config) -> Result<Self, AppError> {
        init_tracing(&config.logging.level, config.logging.json_format);

        let storage = FileStore::new(&config.storage.dir)?;
        Ok(Self {
            identity: IdentityStore::open(storage),
            collections: CollectionStore::seeded(),
            directory: NeighbourDirectory::default(),
        })
    }
}
