use reqwest::StatusCode;
use thiserror::Error;

/// Why a request to the move authority did not resolve.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("invalid authority endpoint {path}: {source}")]
    Endpoint {
        path: &'static str,
        #[source]
        source: url::ParseError,
    },
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint} answered with status {status}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
    },
    #[error("malformed {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl SyncError {
    pub fn endpoint(&self) -> &'static str {
        match self {
            SyncError::Endpoint { path, .. } => *path,
            SyncError::Transport { endpoint, .. }
            | SyncError::Status { endpoint, .. }
            | SyncError::Decode { endpoint, .. } => *endpoint,
        }
    }
}
