//! Reducer trait for the MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// It must be a pure function: (State, Intent) -> State. Intents that make
/// no sense in the current state return it unchanged.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
