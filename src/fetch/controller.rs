use std::sync::Arc;

use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};

use crate::query::RequestDescriptor;
use crate::stories::{StoriesIntent, StoriesStore};

use super::error::FetchError;
use super::source::{SearchPage, StorySource};

/// Result of one issued request, tagged with its sequence number.
#[derive(Debug)]
pub struct FetchCompletion {
    pub seq: u64,
    pub descriptor: RequestDescriptor,
    pub result: Result<SearchPage, FetchError>,
}

/// Owns the request lifecycle between descriptor changes and the store.
///
/// Every `issue` bumps the sequence number. Older requests keep running, but
/// their completions are dropped on arrival, so only the newest descriptor
/// ever reaches the store.
pub struct FetchController<S> {
    source: Arc<S>,
    latest: u64,
    pending: bool,
    tx: UnboundedSender<FetchCompletion>,
    rx: UnboundedReceiver<FetchCompletion>,
}

impl<S: StorySource> FetchController<S> {
    pub fn new(source: S) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            source: Arc::new(source),
            latest: 0,
            pending: false,
            tx,
            rx,
        }
    }

    /// Sequence number of the most recently issued request (0 before any).
    pub fn latest(&self) -> u64 {
        self.latest
    }

    /// Whether the most recent request has not been applied yet.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Dispatches `FETCH_INIT` and starts the request on the runtime.
    ///
    /// Must be called from within a tokio runtime.
    pub fn issue(
        &mut self,
        store: &mut StoriesStore,
        descriptor: RequestDescriptor,
        url: String,
    ) -> u64 {
        self.latest += 1;
        self.pending = true;
        let seq = self.latest;

        store.dispatch(StoriesIntent::FetchInit);
        tracing::debug!(seq, %descriptor, url = %url, "Issuing search");

        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = source.search(&url).await;
            // Receiver lives as long as the controller; a closed channel just
            // means the session is gone.
            let _ = tx.send(FetchCompletion {
                seq,
                descriptor,
                result,
            });
        });

        seq
    }

    /// Applies a completion if it belongs to the latest request.
    ///
    /// Returns `false` for stale completions, which leave the store untouched.
    pub fn apply(&mut self, store: &mut StoriesStore, completion: FetchCompletion) -> bool {
        if completion.seq != self.latest {
            tracing::debug!(
                seq = completion.seq,
                latest = self.latest,
                descriptor = %completion.descriptor,
                "Discarding stale search response"
            );
            return false;
        }

        self.pending = false;
        match completion.result {
            Ok(page) => {
                tracing::info!(
                    descriptor = %completion.descriptor,
                    hits = page.hits.len(),
                    page = page.page,
                    "Search succeeded"
                );
                store.dispatch(StoriesIntent::FetchSuccess {
                    list: page.hits,
                    page: page.page,
                });
            }
            Err(err) => {
                tracing::warn!(
                    descriptor = %completion.descriptor,
                    error_type = err.error_type(),
                    error = %err,
                    "Search failed"
                );
                store.dispatch(StoriesIntent::FetchFailure);
            }
        }
        true
    }

    /// Waits until the latest request has been applied to `store`.
    pub async fn settle(&mut self, store: &mut StoriesStore) {
        while self.pending {
            match self.rx.recv().await {
                Some(completion) => {
                    self.apply(store, completion);
                }
                None => break,
            }
        }
    }

    /// Applies whatever completions already arrived, without waiting.
    ///
    /// Returns how many of them reached the store.
    pub fn drain_ready(&mut self, store: &mut StoriesStore) -> usize {
        let mut applied = 0;
        loop {
            match self.rx.try_recv() {
                Ok(completion) => {
                    if self.apply(store, completion) {
                        applied += 1;
                    }
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        applied
    }
}
