//! HTTP client for the product catalog API.
//!
//! Gated behind the `client` cargo feature so downstream crates that only
//! need the wire types do not pull in `reqwest`.

mod products;

pub use products::{DEFAULT_SORT_KEY, ProductsClient};

use std::fmt;

use url::Url;

/// The error body sent by the product API, passed through uninterpreted.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorPayload {
    /// A plain text body (or a JSON string, unwrapped).
    Text(String),
    /// Any other JSON document, with the body exactly as it was received.
    Json { value: serde_json::Value, raw: String },
}

impl ErrorPayload {
    /// Classify a raw response body.
    pub fn from_body(body: String) -> Self {
        match serde_json::from_str::<serde_json::Value>(&body) {
            Ok(serde_json::Value::String(text)) => Self::Text(text),
            Ok(value) => Self::Json { value, raw: body },
            Err(_) => Self::Text(body),
        }
    }

    /// The payload as text, if the server sent text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Json { .. } => None,
        }
    }

    /// The parsed document, if the server sent structured JSON.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Text(_) => None,
            Self::Json { value, .. } => Some(value),
        }
    }
}

impl fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Json { raw, .. } => f.write_str(raw),
        }
    }
}

/// Errors produced by the catalog HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server returned a non-2xx status code. Displays as the body alone.
    #[error("{0}")]
    Api(ErrorPayload),

    /// Transport-level failure (DNS, TLS, connection reset, …).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be deserialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The base URL cannot carry path segments (e.g. `mailto:`).
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(Url),
}

impl ClientError {
    /// The server's error payload, when the failure came from the server.
    pub fn payload(&self) -> Option<&ErrorPayload> {
        match self {
            Self::Api(payload) => Some(payload),
            _ => None,
        }
    }
}
