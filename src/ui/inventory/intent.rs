use crate::inventory::{Draft, InventoryItem, ItemId, SortKey};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum InventoryIntent {
    /// Replace the collection with what was read at startup.
    Loaded { items: Vec<InventoryItem> },
    /// Append `draft` under `id` unless its name is already taken.
    Add { draft: Draft, id: ItemId },
    /// Replace the item with the same id, keeping its position.
    Update { item: InventoryItem },
    Delete { id: ItemId },
    SetCategoryFilter { category: String },
    /// Step through the category options, wrapping at either end.
    CycleCategoryFilter { forward: bool },
    SetSearchTerm { term: String },
    ToggleSort { key: SortKey },
    OpenAdd,
    OpenEdit { id: ItemId },
    CloseDialog,
    DismissNotice,
    MoveSelection { delta: i32 },
}

impl Intent for InventoryIntent {}
