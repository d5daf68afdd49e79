//! One search screen: the persisted input, the request log, the stories store
//! and the display ordering, wired to a fetch controller.
//!
//! Every change of the current descriptor goes through [`Session::issue`],
//! which is the only place a request starts.

use thiserror::Error;

use crate::fetch::{FetchController, StorySource};
use crate::history::DescriptorLog;
use crate::persist::{KeyValueStore, SemiPersistent};
use crate::query::{QueryBuilder, RequestDescriptor};
use crate::sort::{SortKey, SortState};
use crate::stories::{StoriesIntent, StoriesState, StoriesStore, Story};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Search term must not be empty")]
    EmptySearchTerm,

    #[error("No story with id '{0}' in the current list")]
    UnknownStory(String),

    #[error("No search has been issued yet")]
    NoActiveSearch,
}

pub struct Session<S, K> {
    query: QueryBuilder,
    search_term: SemiPersistent<K>,
    current: Option<RequestDescriptor>,
    log: DescriptorLog,
    store: StoriesStore,
    sort: SortState,
    controller: FetchController<S>,
}

impl<S: StorySource, K: KeyValueStore> Session<S, K> {
    pub fn new(source: S, search_term: SemiPersistent<K>, query: QueryBuilder) -> Self {
        Self {
            query,
            search_term,
            current: None,
            log: DescriptorLog::new(),
            store: StoriesStore::new(),
            sort: SortState::default(),
            controller: FetchController::new(source),
        }
    }

    /// Issues the first page for the persisted (or default) term.
    pub fn start(&mut self) {
        let term = self.search_term.get().to_string();
        self.issue(RequestDescriptor::first_page(term));
    }

    /// Input-box change. Persisted, but nothing is fetched until `submit`.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term.set(term);
    }

    /// Searches for the current input, first page.
    pub fn submit(&mut self) -> Result<(), SessionError> {
        let term = self.search_term.get();
        if term.is_empty() {
            return Err(SessionError::EmptySearchTerm);
        }
        let descriptor = RequestDescriptor::first_page(term);
        self.issue(descriptor);
        Ok(())
    }

    /// Re-issues one of the last searches, putting it back in the input.
    pub fn search_last(&mut self, term: impl Into<String>) {
        let term = term.into();
        self.search_term.set(term.clone());
        self.issue(RequestDescriptor::first_page(term));
    }

    /// Fetches the page after the last loaded one for the active search.
    pub fn more(&mut self) -> Result<(), SessionError> {
        let term = self
            .current
            .as_ref()
            .map(|d| d.search_term.clone())
            .ok_or(SessionError::NoActiveSearch)?;
        let page = self.store.state().page + 1;
        self.issue(RequestDescriptor::new(term, page));
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Result<(), SessionError> {
        let story = self
            .store
            .find(id)
            .cloned()
            .ok_or_else(|| SessionError::UnknownStory(id.to_string()))?;
        self.store.dispatch(StoriesIntent::RemoveStory { story });
        Ok(())
    }

    pub fn sort_by(&mut self, key: SortKey) {
        self.sort = self.sort.select(key);
        tracing::debug!(key = %self.sort.key, reverse = self.sort.reverse, "Sort changed");
    }

    /// Waits for the current request to land in the store.
    pub async fn settle(&mut self) {
        self.controller.settle(&mut self.store).await;
    }

    /// Applies completions that already arrived; returns how many were current.
    pub fn poll(&mut self) -> usize {
        self.controller.drain_ready(&mut self.store)
    }

    pub fn is_pending(&self) -> bool {
        self.controller.is_pending()
    }

    pub fn state(&self) -> &StoriesState {
        self.store.state()
    }

    pub fn search_term(&self) -> &str {
        self.search_term.get()
    }

    /// Backing store of the remembered search term.
    pub fn term_store(&self) -> &K {
        self.search_term.store()
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn current(&self) -> Option<&RequestDescriptor> {
        self.current.as_ref()
    }

    pub fn log(&self) -> &DescriptorLog {
        &self.log
    }

    pub fn last_searches(&self) -> Vec<String> {
        self.log.last_searches()
    }

    /// Stories in display order. The store keeps arrival order.
    pub fn visible_stories(&self) -> Vec<Story> {
        self.sort.apply(&self.store.state().items)
    }

    fn issue(&mut self, descriptor: RequestDescriptor) {
        let url = self.query.build(&descriptor);
        self.log.push(url.clone());
        self.current = Some(descriptor.clone());
        self.controller.issue(&mut self.store, descriptor, url);
    }
}
