//! Persistence boundary for the inventory collection.
//!
//! The store always reads and writes the whole collection. Nothing here
//! knows about view state.

mod error;
mod json_file;
mod memory;

pub use error::StorageError;
pub use json_file::{JsonFileStorage, DEFAULT_SLOT};
pub use memory::MemoryStorage;

use crate::inventory::InventoryItem;

pub trait InventoryStorage {
    /// Read the saved collection. `Ok(None)` means nothing was ever saved.
    fn load(&self) -> Result<Option<Vec<InventoryItem>>, StorageError>;

    /// Replace the saved collection with `items`.
    fn save(&self, items: &[InventoryItem]) -> Result<(), StorageError>;
}

impl<T: InventoryStorage + ?Sized> InventoryStorage for Box<T> {
    fn load(&self) -> Result<Option<Vec<InventoryItem>>, StorageError> {
        (**self).load()
    }

    fn save(&self, items: &[InventoryItem]) -> Result<(), StorageError> {
        (**self).save(items)
    }
}
