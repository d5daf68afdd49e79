//! Display ordering for the stories list. Never touches the store.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::stories::Story;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    None,
    Title,
    Author,
    Comment,
    Point,
}

impl SortKey {
    pub fn all() -> &'static [SortKey] {
        &[
            Self::None,
            Self::Title,
            Self::Author,
            Self::Comment,
            Self::Point,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Title => "title",
            Self::Author => "author",
            Self::Comment => "comment",
            Self::Point => "point",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown sort key '{0}' (expected none, title, author, comment or point)")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "title" => Ok(Self::Title),
            "author" => Ok(Self::Author),
            "comment" | "comments" => Ok(Self::Comment),
            "point" | "points" => Ok(Self::Point),
            _ => Err(UnknownSortKey(s.to_string())),
        }
    }
}

/// Currently selected ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub key: SortKey,
    pub reverse: bool,
}

impl SortState {
    pub fn new(key: SortKey, reverse: bool) -> Self {
        Self { key, reverse }
    }

    /// Selecting the current key again flips `reverse`; any other key resets it.
    pub fn select(self, key: SortKey) -> Self {
        Self {
            key,
            reverse: self.key == key && !self.reverse,
        }
    }

    pub fn apply(&self, stories: &[Story]) -> Vec<Story> {
        let mut sorted = base_order(self.key, stories);
        if self.reverse {
            sorted.reverse();
        }
        sorted
    }
}

fn base_order(key: SortKey, stories: &[Story]) -> Vec<Story> {
    let mut list = stories.to_vec();
    match key {
        SortKey::None => {}
        SortKey::Title => list.sort_by(|a, b| a.title.cmp(&b.title)),
        SortKey::Author => list.sort_by(|a, b| a.author.cmp(&b.author)),
        SortKey::Comment => {
            list.sort_by_key(|s| s.num_comments);
            list.reverse();
        }
        SortKey::Point => {
            list.sort_by_key(|s| s.points);
            list.reverse();
        }
    }
    list
}
