use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::types::Config;
use crate::query::QueryBuilder;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// `~/.config/hnstories/config.toml` on Linux, the platform equivalent
    /// elsewhere via `dirs::config_dir()`, current directory as a fallback.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("hnstories").join("config.toml")
    }

    /// Default location of the persisted search state.
    pub fn default_state_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("hnstories").join("state.toml")
    }

    /// Where the search term is persisted, honoring `search.state_file`.
    pub fn state_path(&self) -> PathBuf {
        self.search
            .state_file
            .clone()
            .unwrap_or_else(Self::default_state_path)
    }

    /// Loads from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads from `path`.
    ///
    /// A missing file yields `Config::default()`; an existing one must parse
    /// and validate.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Checks:
    /// - `api.base_url` + `api.search_path` form a valid URL
    /// - both timeouts are positive
    /// - `search.storage_key` is not empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Err(e) = self.query_builder() {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Invalid search endpoint '{}{}': {}",
                    self.api.base_url, self.api.search_path, e
                ),
            });
        }

        if self.api.timeout_seconds == 0 || self.api.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "Timeouts must be greater than zero".to_string(),
            });
        }

        if self.search.storage_key.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "search.storage_key must not be empty".to_string(),
            });
        }

        Ok(())
    }

    pub fn query_builder(&self) -> Result<QueryBuilder, url::ParseError> {
        QueryBuilder::new(&self.api.base_url, &self.api.search_path)
    }
}
