use super::intent::Intent;
use super::state::State;

/// Transforms state based on intents.
///
/// The only place state transitions happen. Implementations must stay pure:
/// all I/O belongs to whoever dispatches.
pub trait Reducer {
    type State: State;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
