/// State owned by one screen feature (the inventory table, the item form).
///
/// Reducers take it by value and hand back the next value; `Default` is what
/// `std::mem::take` leaves behind while a reducer runs. Tests compare states
/// directly, hence `PartialEq`.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
