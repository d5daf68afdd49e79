//! The stories list state machine.
//!
//! `idle → loading → loaded | errored`, driven by [`StoriesIntent`]s that the
//! fetch controller and the session dispatch into a [`StoriesStore`].

mod intent;
mod reducer;
mod state;
mod story;

pub use intent::{ActionError, ActionKind, StoriesIntent};
pub use reducer::StoriesReducer;
pub use state::{FetchStatus, StoriesState};
pub use story::Story;

use crate::dispatch_mvi;

/// Owner of the one [`StoriesState`] of a session.
///
/// Passed by `&mut` to whatever dispatches; there is no ambient instance.
#[derive(Debug, Default)]
pub struct StoriesStore {
    state: StoriesState,
}

impl StoriesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &StoriesState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: StoriesIntent) {
        let action = intent.kind();
        dispatch_mvi!(self, state, StoriesReducer, intent);
        tracing::trace!(
            %action,
            status = ?self.state.status,
            page = self.state.page,
            items = self.state.items.len(),
            "Stories state updated"
        );
    }

    pub fn find(&self, id: &str) -> Option<&Story> {
        self.state.items.iter().find(|s| s.id == id)
    }
}
