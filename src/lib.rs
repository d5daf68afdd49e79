//! Search-screen core for the Hacker News (Algolia) story search.
//!
//! A reducer-driven stories store, a fetch controller that feeds it and
//! discards stale responses, the derived "last searches" list and a pure
//! display sort, tied together by [`session::Session`].

pub mod cli;
pub mod config;
pub mod fetch;
pub mod history;
pub mod logging;
pub mod mvi;
pub mod persist;
pub mod query;
pub mod session;
pub mod sort;
pub mod stories;
