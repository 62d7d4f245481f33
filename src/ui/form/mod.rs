//! Item editor form feature module.
//!
//! One form serves both adding and editing; the initial values decide
//! which. Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Form state, field buffers, validation
//! - `intent.rs` - Keystrokes and lifecycle actions
//! - `reducer.rs` - State transitions
//! - `dialog.rs` - Rendering

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_form_dialog;
pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{coerce_price, FormError, FormField, FormFields, FormMode, FormState};
