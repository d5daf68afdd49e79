use thiserror::Error;

/// Why a search request failed.
///
/// The store only ever sees `FETCH_FAILURE`; the variant is kept for logs.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Connection failed for '{url}': {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Search request timed out after {duration}s")]
    Timeout { duration: u64 },

    #[error("Search endpoint returned {status} for '{url}'")]
    Status { status: u16, url: String },

    #[error("Malformed search response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Short tag for structured log fields.
    pub fn error_type(&self) -> &'static str {
        match self {
            FetchError::Client(_) => "client_error",
            FetchError::Network { .. } => "connection_error",
            FetchError::Timeout { .. } => "request_timeout",
            FetchError::Status { .. } => "upstream_status",
            FetchError::Decode(_) => "decode_error",
        }
    }
}
