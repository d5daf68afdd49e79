//! Asynchronous search requests and their hand-off into the stories store.

mod algolia;
mod controller;
mod error;
mod source;

pub use algolia::{AlgoliaClient, TimeoutConfig};
pub use controller::{FetchCompletion, FetchController};
pub use error::FetchError;
pub use source::{SearchPage, StorySource};
