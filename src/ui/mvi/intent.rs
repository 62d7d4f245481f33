/// Something that asks a reducer for a state change.
///
/// Key handling produces most of them (adding an item, moving the cursor,
/// typing into the form). `Loaded` is the one the app raises on its own
/// after reading storage.
pub trait Intent: Send + 'static {}
