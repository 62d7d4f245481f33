use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::inventory::{SortConfig, SortDirection, SortKey};
use crate::storage::DEFAULT_SLOT;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the collection is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage file; defaults to `<data_dir>/inventory-editor/storage.json`.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Slot inside the storage file (default: "inventory").
    #[serde(default = "default_storage_key")]
    pub key: String,
}

/// Table rendering options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Quantities below this value are highlighted (default: 10).
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,
    /// Prefix shown before prices (default: "$").
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

/// Initial sort applied at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default)]
    pub sort_key: SortKey,
    #[serde(default)]
    pub sort_direction: SortDirection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file; defaults to `<data_dir>/inventory-editor/inventory-editor.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_storage_key() -> String {
    DEFAULT_SLOT.to_string()
}

fn default_low_stock_threshold() -> u32 {
    10
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: None,
            key: default_storage_key(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: default_low_stock_threshold(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl From<ViewConfig> for SortConfig {
    fn from(view: ViewConfig) -> Self {
        SortConfig {
            key: view.sort_key,
            direction: view.sort_direction,
        }
    }
}
