//! State / intent / reducer traits shared by the UI features.
//!
//! A key press becomes an intent, the feature's reducer folds it into a new
//! state, and the next frame is drawn from that state:
//!
//! ```text
//! key ──→ Intent ──→ Reducer ──→ State ──→ draw
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
