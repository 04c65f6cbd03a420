use thiserror::Error;

use super::endpoint::Endpoint;

/// Network-level failure: connect, timeout, body read
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        Self(e.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Error fetching {endpoint}: {source}")]
    Transport {
        endpoint: Endpoint,
        #[source]
        source: TransportError,
    },
    #[error("Failed to fetch {endpoint}: {status}")]
    Status { endpoint: Endpoint, status: u16 },
    #[error("Error fetching {endpoint}: {source}")]
    Decode {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },
}
