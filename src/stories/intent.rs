//! Transitions accepted by the stories reducer.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::mvi::Intent;

use super::story::Story;

#[derive(Debug, Clone, PartialEq)]
pub enum StoriesIntent {
    /// A request was issued. Keeps the current items so pages can append.
    FetchInit,
    /// The current request resolved. `page == 0` replaces, anything else appends.
    FetchSuccess { list: Vec<Story>, page: u32 },
    /// The current request failed (network, status or body).
    FetchFailure,
    /// User dismissed a story. Matches on id only.
    RemoveStory { story: Story },
}

impl Intent for StoriesIntent {}

impl StoriesIntent {
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::FetchInit => ActionKind::FetchInit,
            Self::FetchSuccess { .. } => ActionKind::FetchSuccess,
            Self::FetchFailure => ActionKind::FetchFailure,
            Self::RemoveStory { .. } => ActionKind::RemoveStory,
        }
    }
}

/// Payload-free name of a transition, as it appears in logs and wire formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    FetchInit,
    FetchSuccess,
    FetchFailure,
    RemoveStory,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FetchInit => "FETCH_INIT",
            Self::FetchSuccess => "FETCH_SUCCESS",
            Self::FetchFailure => "FETCH_FAILURE",
            Self::RemoveStory => "REMOVE_STORY",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when an action name does not belong to the reducer's vocabulary.
///
/// This is a contract violation between dispatcher and store, not a runtime
/// condition: callers must not recover by skipping the action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("Unknown stories action '{0}'")]
    Unknown(String),
}

impl FromStr for ActionKind {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FETCH_INIT" => Ok(Self::FetchInit),
            "FETCH_SUCCESS" => Ok(Self::FetchSuccess),
            "FETCH_FAILURE" => Ok(Self::FetchFailure),
            "REMOVE_STORY" => Ok(Self::RemoveStory),
            other => Err(ActionError::Unknown(other.to_string())),
        }
    }
}
