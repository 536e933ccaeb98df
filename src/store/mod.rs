pub mod collection;
pub mod directory;
pub mod identity;
pub mod seed;

pub use collection::{CollectionStore, CURRENT_USER};
pub use directory::{NeighbourDirectory, NeighbourProfile};
pub use identity::IdentityStore;
