use super::intent::Intent;
use super::state::UiState;

/// Pure transition from one feature state to the next.
///
/// Anything with an outside effect, such as saving the collection or reading
/// the clock for a new id, is done by `App` before or after `reduce`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
