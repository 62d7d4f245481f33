//! In-memory storage, primarily for tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::{InventoryStorage, StorageError};
use crate::inventory::InventoryItem;

/// Storage that keeps the last saved snapshot in memory.
///
/// Clones share the same snapshot, so a test can hand one clone to the app
/// and inspect writes through another. Saves can be forced to fail.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Rc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    snapshot: RefCell<Option<Vec<InventoryItem>>>,
    saves: Cell<usize>,
    fail_saves: Cell<bool>,
    fail_loads: Cell<bool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that already holds `items`.
    pub fn with_items(items: Vec<InventoryItem>) -> Self {
        let storage = Self::new();
        *storage.inner.snapshot.borrow_mut() = Some(items);
        storage
    }

    pub fn snapshot(&self) -> Option<Vec<InventoryItem>> {
        self.inner.snapshot.borrow().clone()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.inner.saves.get()
    }

    pub fn fail_saves(&self, fail: bool) {
        self.inner.fail_saves.set(fail);
    }

    pub fn fail_loads(&self, fail: bool) {
        self.inner.fail_loads.set(fail);
    }
}

impl InventoryStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Vec<InventoryItem>>, StorageError> {
        if self.inner.fail_loads.get() {
            return Err(StorageError::Unavailable("load disabled".to_string()));
        }
        Ok(self.snapshot())
    }

    fn save(&self, items: &[InventoryItem]) -> Result<(), StorageError> {
        if self.inner.fail_saves.get() {
            return Err(StorageError::Unavailable("save disabled".to_string()));
        }
        *self.inner.snapshot.borrow_mut() = Some(items.to_vec());
        self.inner.saves.set(self.inner.saves.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::seed_items;

    #[test]
    fn clones_share_snapshot() {
        let storage = MemoryStorage::new();
        let observer = storage.clone();
        storage.save(&seed_items()).unwrap();
        assert_eq!(observer.snapshot(), Some(seed_items()));
        assert_eq!(observer.save_count(), 1);
    }

    #[test]
    fn failed_save_leaves_snapshot_alone() {
        let storage = MemoryStorage::with_items(Vec::new());
        storage.fail_saves(true);
        assert!(storage.save(&seed_items()).is_err());
        assert_eq!(storage.snapshot(), Some(Vec::new()));
        assert_eq!(storage.save_count(), 0);
    }
}
