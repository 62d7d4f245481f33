use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::{InventoryStorage, StorageError};
use crate::inventory::InventoryItem;

/// Slot name the collection is stored under.
pub const DEFAULT_SLOT: &str = "inventory";

/// Local key/value store backed by a single JSON object on disk.
///
/// Each top-level key is a slot. This store owns one slot and leaves any
/// others in the file untouched. Writes go to a sibling temp file that is
/// renamed over the original, so readers never observe a partial file.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
    slot: String,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>, slot: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            slot: slot.into(),
        }
    }

    /// `<data_dir>/inventory-editor/storage.json`, falling back to the
    /// current directory when no data dir is known.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("inventory-editor").join("storage.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    fn read_slots(&self) -> Result<Option<Map<String, Value>>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| StorageError::Parse {
                path: self.path.clone(),
                source,
            })
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "storage.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl InventoryStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<Vec<InventoryItem>>, StorageError> {
        let Some(mut slots) = self.read_slots()? else {
            return Ok(None);
        };
        let Some(value) = slots.remove(&self.slot) else {
            return Ok(None);
        };

        serde_json::from_value(value)
            .map(Some)
            .map_err(|source| StorageError::Parse {
                path: self.path.clone(),
                source,
            })
    }

    fn save(&self, items: &[InventoryItem]) -> Result<(), StorageError> {
        let mut slots = match self.read_slots() {
            Ok(slots) => slots.unwrap_or_default(),
            Err(err) => {
                tracing::warn!("Discarding unreadable storage file: {}", err);
                Map::new()
            }
        };
        let value = serde_json::to_value(items).map_err(StorageError::Encode)?;
        slots.insert(self.slot.clone(), value);
        let content = serde_json::to_string_pretty(&slots).map_err(StorageError::Encode)?;

        let write_err = |source| StorageError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let temp = self.temp_path();
        fs::write(&temp, content).map_err(write_err)?;
        fs::rename(&temp, &self.path).map_err(write_err)?;

        tracing::debug!(
            "Saved {} items to {} [{}]",
            items.len(),
            self.path.display(),
            self.slot
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::seed_items;
    use tempfile::TempDir;

    fn storage(dir: &TempDir) -> JsonFileStorage {
        JsonFileStorage::new(dir.path().join("storage.json"), DEFAULT_SLOT)
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = TempDir::new().unwrap();
        assert!(storage(&dir).load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = storage(&dir);
        let items = seed_items();
        store.save(&items).unwrap();
        assert_eq!(store.load().unwrap(), Some(items));
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStorage::new(dir.path().join("a").join("b").join("s.json"), "inv");
        store.save(&seed_items()).unwrap();
        assert!(store.path().exists());
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn save_keeps_other_slots() {
        let dir = TempDir::new().unwrap();
        let store = storage(&dir);
        fs::write(store.path(), r#"{"theme": "dark"}"#).unwrap();
        store.save(&seed_items()).unwrap();

        let raw: Value = serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw["theme"], "dark");
        assert_eq!(raw[DEFAULT_SLOT].as_array().map(Vec::len), Some(4));
    }

    #[test]
    fn absent_slot_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = storage(&dir);
        fs::write(store.path(), r#"{"other": []}"#).unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn corrupt_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let store = storage(&dir);
        fs::write(store.path(), "{not json").unwrap();
        assert!(matches!(store.load(), Err(StorageError::Parse { .. })));
    }

    #[test]
    fn foreign_slot_value_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let store = storage(&dir);
        fs::write(store.path(), r#"{"inventory": {"items": 3}}"#).unwrap();
        assert!(matches!(store.load(), Err(StorageError::Parse { .. })));
    }

    #[test]
    fn save_replaces_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let store = storage(&dir);
        fs::write(store.path(), "garbage").unwrap();
        store.save(&seed_items()).unwrap();
        assert_eq!(store.load().unwrap(), Some(seed_items()));
    }
}
