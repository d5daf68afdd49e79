//! Append-only log of issued requests and the "last searches" derived from it.

use crate::query::search_term_of;

/// How many distinct trailing terms are considered, including the active one.
pub const LAST_SEARCHES_WINDOW: usize = 6;

/// Every request URL issued during the session, oldest first. Never pruned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptorLog {
    keys: Vec<String>,
}

impl DescriptorLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: String) {
        self.keys.push(key);
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn latest(&self) -> Option<&str> {
        self.keys.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn last_searches(&self) -> Vec<String> {
        last_searches(&self.keys)
    }
}

/// Terms for quick re-issue: adjacent duplicates collapsed, at most
/// `LAST_SEARCHES_WINDOW - 1` entries, oldest first, never the active term.
///
/// Keys that do not decode to a term are skipped.
pub fn last_searches<S: AsRef<str>>(keys: &[S]) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for term in keys.iter().filter_map(|k| search_term_of(k.as_ref())) {
        if terms.last() != Some(&term) {
            terms.push(term);
        }
    }

    let start = terms.len().saturating_sub(LAST_SEARCHES_WINDOW);
    let mut window = terms.split_off(start);
    window.pop();
    window
}
