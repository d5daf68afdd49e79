use std::time::Duration;

use reqwest::Client;
use tokio::time::timeout;

use crate::config::ApiConfig;

use super::error::FetchError;
use super::source::{SearchPage, StorySource};

/// Connect and total-request limits for the search client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutConfig {
    pub connect: Duration,
    pub request: Duration,
}

impl From<&ApiConfig> for TimeoutConfig {
    fn from(api: &ApiConfig) -> Self {
        Self {
            connect: Duration::from_secs(api.connect_timeout_seconds.into()),
            request: Duration::from_secs(api.timeout_seconds.into()),
        }
    }
}

/// HTTP client for the Algolia Hacker News search endpoint.
pub struct AlgoliaClient {
    client: Client,
    timeouts: TimeoutConfig,
}

impl AlgoliaClient {
    pub fn new(timeouts: TimeoutConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(timeouts.connect)
            .user_agent(concat!("hnstories/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client, timeouts })
    }

    pub fn from_config(api: &ApiConfig) -> Result<Self, FetchError> {
        Self::new(TimeoutConfig::from(api))
    }

    async fn do_search(&self, url: &str) -> Result<SearchPage, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Network {
            url: url.to_string(),
            source: e,
        })?;

        Ok(serde_json::from_slice(&body)?)
    }
}

impl StorySource for AlgoliaClient {
    async fn search(&self, url: &str) -> Result<SearchPage, FetchError> {
        tracing::debug!(url = %url, "Sending search request");
        match timeout(self.timeouts.request, self.do_search(url)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout {
                duration: self.timeouts.request.as_secs(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeouts_come_from_api_config() {
        let api = ApiConfig {
            timeout_seconds: 12,
            connect_timeout_seconds: 3,
            ..ApiConfig::default()
        };
        let timeouts = TimeoutConfig::from(&api);
        assert_eq!(timeouts.connect, Duration::from_secs(3));
        assert_eq!(timeouts.request, Duration::from_secs(12));
    }

    #[test]
    fn client_builds_from_default_config() {
        assert!(AlgoliaClient::from_config(&ApiConfig::default()).is_ok());
    }
}
