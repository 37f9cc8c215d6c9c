//! Repository Layer
//!
//! Key-value storage abstraction and the favorites persistence built on it.

mod traits;
mod browser;
mod memory;
mod favorites_store;

pub use traits::{KeyValueStore, StorageError};
pub use browser::BrowserStorage;
pub use memory::MemoryStore;
pub use favorites_store::{FavoritesStore, is_favorited, FAVORITES_STORAGE_KEY};
