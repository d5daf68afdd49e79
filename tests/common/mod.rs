//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_algolia;

use hacker_stories::fetch::{AlgoliaClient, TimeoutConfig};
use hacker_stories::persist::{MemoryStore, SemiPersistent};
use hacker_stories::query::QueryBuilder;
use hacker_stories::session::Session;
use hacker_stories::stories::Story;
use std::net::SocketAddr;
use std::time::Duration;

pub use mock_algolia::{MockAlgolia, MockResponse};

pub type TestSession = Session<AlgoliaClient, MemoryStore>;

pub fn story(id: &str, title: &str, author: &str, comments: u32, points: i64) -> Story {
    Story::new(id, title, author, comments, points)
}

pub fn ids(stories: &[Story]) -> Vec<String> {
    stories.iter().map(|s| s.id.clone()).collect()
}

pub fn query_for(addr: SocketAddr) -> QueryBuilder {
    QueryBuilder::new(&format!("http://{}/api/v1", addr), "/search")
        .expect("mock endpoint is a valid URL")
}

pub fn client() -> AlgoliaClient {
    AlgoliaClient::new(TimeoutConfig {
        connect: Duration::from_secs(2),
        request: Duration::from_secs(5),
    })
    .expect("Failed to build client")
}

/// Session against the mock server with an in-memory term store.
pub fn session_for(mock: &MockAlgolia, stored_term: Option<&str>) -> TestSession {
    let store = match stored_term {
        Some(term) => MemoryStore::new().with("search", term),
        None => MemoryStore::new(),
    };
    let term = SemiPersistent::new(store, "search", "React");
    Session::new(client(), term, query_for(mock.addr()))
}
