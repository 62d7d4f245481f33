use inventory_editor::config::{Config, ConfigError};
use inventory_editor::inventory::{SortConfig, SortDirection, SortKey};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

#[test]
fn missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.storage.key, "inventory");
    assert_eq!(config.display.low_stock_threshold, 10);
    assert_eq!(config.display.currency_symbol, "$");
    assert_eq!(config.logging.level, "info");
    assert_eq!(
        SortConfig::from(config.view),
        SortConfig {
            key: SortKey::Quantity,
            direction: SortDirection::Ascending,
        }
    );
}

#[test]
fn partial_file_fills_remaining_defaults() {
    let (_dir, path) = write_config(
        r#"
[display]
low_stock_threshold = 3

[view]
sort_key = "price"
sort_direction = "descending"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.display.low_stock_threshold, 3);
    assert_eq!(config.display.currency_symbol, "$");
    assert_eq!(config.view.sort_key, SortKey::Price);
    assert_eq!(config.view.sort_direction, SortDirection::Descending);
    assert_eq!(config.storage.key, "inventory");
}

#[test]
fn explicit_paths_are_used() {
    let (_dir, path) = write_config(
        r#"
[storage]
path = "/srv/inventory/store.json"
key = "shop"

[logging]
file = "/var/log/inventory.log"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.storage_path(), PathBuf::from("/srv/inventory/store.json"));
    assert_eq!(config.log_path(), PathBuf::from("/var/log/inventory.log"));
    assert_eq!(config.storage.key, "shop");
}

#[test]
fn tilde_is_expanded() {
    let (_dir, path) = write_config("[storage]\npath = \"~/inv/storage.json\"\n");
    let config = Config::load_from(&path).unwrap();
    if let Some(home) = dirs::home_dir() {
        assert_eq!(config.storage_path(), home.join("inv").join("storage.json"));
    }
}

#[test]
fn empty_storage_key_fails_validation() {
    let (_dir, path) = write_config("[storage]\nkey = \"  \"\n");
    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let (_dir, path) = write_config("[display\nlow_stock_threshold = ");
    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn unknown_sort_key_is_a_parse_error() {
    let (_dir, path) = write_config("[view]\nsort_key = \"weight\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}
