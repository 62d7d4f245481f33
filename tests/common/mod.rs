//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use inventory_editor::config::DisplayConfig;
use inventory_editor::inventory::{InventoryItem, SortConfig};
use inventory_editor::storage::{InventoryStorage, JsonFileStorage, DEFAULT_SLOT};
use inventory_editor::ui::app::App;
use inventory_editor::ui::form::FormIntent;
use std::path::Path;
use tempfile::TempDir;

/// Storage file inside a fresh temp dir. Keep the `TempDir` alive.
pub fn temp_storage() -> (TempDir, JsonFileStorage) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let storage = JsonFileStorage::new(dir.path().join("storage.json"), DEFAULT_SLOT);
    (dir, storage)
}

/// App over `storage` with default display and sort settings.
pub fn make_app<S: InventoryStorage + 'static>(storage: S) -> App {
    App::new(
        Box::new(storage),
        DisplayConfig::default(),
        SortConfig::default(),
    )
}

/// Replace every field of the open form, in focus order.
pub fn fill_form(app: &mut App, name: &str, category: &str, quantity: &str, price: &str) {
    for value in [name, category, quantity, price] {
        clear_focused(app);
        for ch in value.chars() {
            app.dispatch_form(FormIntent::Input { ch });
        }
        app.dispatch_form(FormIntent::NextField);
    }
}

/// Open the add dialog, fill it and submit.
pub fn add_item(app: &mut App, name: &str, category: &str, quantity: &str, price: &str) {
    app.open_add();
    fill_form(app, name, category, quantity, price);
    app.submit_form();
}

fn clear_focused(app: &mut App) {
    // Longest field bounds the number of backspaces needed.
    let longest = app
        .form()
        .fields()
        .map(|f| {
            [&f.name, &f.category, &f.quantity, &f.price_text]
                .iter()
                .map(|s| s.chars().count())
                .max()
                .unwrap_or(0)
        })
        .unwrap_or(0);
    for _ in 0..longest {
        app.dispatch_form(FormIntent::Backspace);
    }
}

pub fn names(items: &[&InventoryItem]) -> Vec<String> {
    items.iter().map(|item| item.name.clone()).collect()
}

pub fn read_file(path: &Path) -> String {
    std::fs::read_to_string(path).expect("Failed to read storage file")
}
