use std::future::Future;

use serde::Deserialize;

use crate::stories::Story;

use super::error::FetchError;

/// Decoded body of one search response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchPage {
    pub hits: Vec<Story>,
    pub page: u32,
}

/// Transport seam for the fetch controller.
///
/// `url` is the canonical request key built by [`crate::query::QueryBuilder`].
pub trait StorySource: Send + Sync + 'static {
    fn search(&self, url: &str) -> impl Future<Output = Result<SearchPage, FetchError>> + Send;
}
