use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::query::{DEFAULT_API_BASE, DEFAULT_SEARCH_PATH};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Search endpoint and HTTP limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the search API (e.g., "https://hn.algolia.com/api/v1").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path appended to `base_url` (e.g., "/search").
    #[serde(default = "default_search_path")]
    pub search_path: String,
    /// Total request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Search term defaults and where the last term is remembered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Term used when nothing has been persisted yet.
    #[serde(default = "default_term")]
    pub default_term: String,
    /// Key under which the last typed term is stored.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// State file override. Defaults to `<data dir>/hnstories/state.toml`.
    #[serde(default)]
    pub state_file: Option<PathBuf>,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_search_path() -> String {
    DEFAULT_SEARCH_PATH.to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_term() -> String {
    "React".to_string()
}

fn default_storage_key() -> String {
    "search".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            search_path: default_search_path(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_term: default_term(),
            storage_key: default_storage_key(),
            state_file: None,
        }
    }
}
