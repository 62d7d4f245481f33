//! Inventory records and the pure computations over them.

mod id;
mod item;
pub mod numeric;
pub mod view;

pub use id::IdGenerator;
pub use item::{seed_items, Draft, InventoryItem, ItemId};
pub use numeric::{extract_leading_number, is_low_stock, leading_number};
pub use view::{
    category_options, derive_view, SortConfig, SortDirection, SortKey, ViewQuery, ALL_CATEGORIES,
};
