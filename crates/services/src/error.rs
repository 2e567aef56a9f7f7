//! Shared error types for the services crate.

use serde_json::Value;
use thiserror::Error;

/// Errors emitted by `ApiClient`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransportError {
    #[error("invalid request path {path:?}")]
    InvalidPath {
        path: String,
        #[source]
        source: url::ParseError,
    },
    #[error("request failed with status {status}")]
    Status {
        status: reqwest::StatusCode,
        /// Server-provided error body, or its text wrapped as a JSON string.
        body: Value,
    },
    #[error("response body is not valid JSON")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl TransportError {
    /// Best-effort human message carried by a failed response.
    #[must_use]
    pub fn server_message(&self) -> Option<String> {
        let TransportError::Status { body, .. } = self else {
            return None;
        };
        match body {
            Value::String(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
            Value::Object(map) => ["detail", "message", "error"]
                .iter()
                .filter_map(|key| map.get(*key))
                .find_map(Value::as_str)
                .map(str::to_string),
            _ => None,
        }
    }
}

/// Errors emitted by `ApiConfig`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid API base URL {raw:?}: {source}")]
    InvalidBaseUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("API base URL must use http or https, got {0:?}")]
    UnsupportedScheme(String),
    #[error("invalid timeout {0:?}, expected whole seconds > 0")]
    InvalidTimeout(String),
}

/// Errors emitted by `RoadmapService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RoadmapServiceError {
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Transport(#[from] TransportError),
}
