//! Inventory store & view feature module.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Collection, view settings, dialog and notice state
//! - `intent.rs` - User/system actions
//! - `reducer.rs` - State transitions

mod intent;
mod reducer;
mod state;

pub use intent::InventoryIntent;
pub use reducer::InventoryReducer;
pub use state::{DialogState, InventoryState, Notice};
