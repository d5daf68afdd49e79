use crate::mvi::Reducer;

use super::intent::StoriesIntent;
use super::state::{FetchStatus, StoriesState};

/// Reducer for the stories list.
///
/// Pure: the fetch controller owns every side effect and calls `dispatch`
/// around them.
pub struct StoriesReducer;

impl Reducer for StoriesReducer {
    type State = StoriesState;
    type Intent = StoriesIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StoriesIntent::FetchInit => StoriesState {
                status: FetchStatus::Loading,
                ..state
            },

            StoriesIntent::FetchSuccess { list, page } => {
                let items = if page == 0 {
                    list
                } else {
                    let mut items = state.items;
                    items.extend(list);
                    items
                };
                StoriesState {
                    items,
                    page,
                    status: FetchStatus::Loaded,
                }
            }

            StoriesIntent::FetchFailure => StoriesState {
                status: FetchStatus::Errored,
                ..state
            },

            StoriesIntent::RemoveStory { story } => {
                let mut items = state.items;
                items.retain(|item| item.id != story.id);
                StoriesState { items, ..state }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stories::Story;

    fn story(id: &str) -> Story {
        Story::new(id, format!("Story {id}"), "author", 0, 0)
    }

    fn ids(state: &StoriesState) -> Vec<&str> {
        state.items.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn init_keeps_items_and_clears_error() {
        let state = StoriesState {
            items: vec![story("a")],
            page: 2,
            status: FetchStatus::Errored,
        };
        let new = StoriesReducer::reduce(state, StoriesIntent::FetchInit);
        assert_eq!(new.status, FetchStatus::Loading);
        assert!(!new.is_error());
        assert_eq!(ids(&new), vec!["a"]);
        assert_eq!(new.page, 2);
    }

    #[test]
    fn page_zero_replaces() {
        let state = StoriesState {
            items: vec![story("old")],
            page: 3,
            status: FetchStatus::Loading,
        };
        let new = StoriesReducer::reduce(
            state,
            StoriesIntent::FetchSuccess {
                list: vec![story("a"), story("b")],
                page: 0,
            },
        );
        assert_eq!(ids(&new), vec!["a", "b"]);
        assert_eq!(new.page, 0);
        assert_eq!(new.status, FetchStatus::Loaded);
    }

    #[test]
    fn later_pages_append() {
        let state = StoriesState {
            items: vec![story("a"), story("b")],
            page: 0,
            status: FetchStatus::Loading,
        };
        let new = StoriesReducer::reduce(
            state,
            StoriesIntent::FetchSuccess {
                list: vec![story("c")],
                page: 1,
            },
        );
        assert_eq!(ids(&new), vec!["a", "b", "c"]);
        assert_eq!(new.page, 1);
    }

    #[test]
    fn failure_keeps_items() {
        let state = StoriesState {
            items: vec![story("a")],
            page: 0,
            status: FetchStatus::Loading,
        };
        let new = StoriesReducer::reduce(state, StoriesIntent::FetchFailure);
        assert_eq!(new.status, FetchStatus::Errored);
        assert!(!new.is_loading());
        assert_eq!(ids(&new), vec!["a"]);
    }

    #[test]
    fn remove_drops_every_matching_id() {
        let state = StoriesState {
            items: vec![story("a"), story("b"), story("a")],
            page: 0,
            status: FetchStatus::Loaded,
        };
        let new = StoriesReducer::reduce(state, StoriesIntent::RemoveStory { story: story("a") });
        assert_eq!(ids(&new), vec!["b"]);
        assert_eq!(new.status, FetchStatus::Loaded);
    }

    #[test]
    fn remove_missing_id_is_noop() {
        let state = StoriesState {
            items: vec![story("a")],
            page: 0,
            status: FetchStatus::Errored,
        };
        let new = StoriesReducer::reduce(
            state.clone(),
            StoriesIntent::RemoveStory { story: story("zzz") },
        );
        assert_eq!(new, state);
    }
}
