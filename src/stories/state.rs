use crate::mvi::State;

use super::story::Story;

/// Where the stories list is in its request lifecycle.
///
/// `Loaded` and `Errored` are the settled states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoriesState {
    /// Accumulated hits in arrival order across pages of the same search.
    pub items: Vec<Story>,
    /// Page of the most recent successful fetch.
    pub page: u32,
    pub status: FetchStatus,
}

impl State for StoriesState {}

impl StoriesState {
    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    pub fn is_error(&self) -> bool {
        self.status == FetchStatus::Errored
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.status, FetchStatus::Loaded | FetchStatus::Errored)
    }
}
