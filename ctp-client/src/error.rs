//! Remote client error types.

use serde_json::json;
use thiserror::Error;

/// Result type for remote client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors returned by a [`TypeRepository`](crate::TypeRepository).
///
/// "Not found" on lookup is not an error; it is reported as
/// [`Lookup::NotFound`](crate::Lookup::NotFound).
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport error (connection, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response other than a version conflict.
    #[error("request rejected with status {status}: {body}")]
    Status { status: u16, body: String },

    /// The supplied version was stale (HTTP 409).
    #[error("version conflict: {0}")]
    Conflict(String),

    /// Response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Invalid client configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// The HTTP status behind this error, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Conflict(_) => Some(409),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns true if the platform rejected a write because the supplied
    /// version was stale.
    pub fn is_conflict(&self) -> bool {
        matches!(self, ClientError::Conflict(_))
    }

    /// Stable short name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            ClientError::Http(_) => "http",
            ClientError::Status { .. } => "status",
            ClientError::Conflict(_) => "conflict",
            ClientError::Decode(_) => "decode",
            ClientError::Config(_) => "config",
        }
    }

    /// Serialized form of the error for logs and wrapped failures.
    pub fn to_json(&self) -> serde_json::Value {
        let mut value = json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        if let Some(status) = self.status() {
            value["status"] = json!(status);
        }
        if let ClientError::Status { body, .. } | ClientError::Conflict(body) = self {
            value["body"] = serde_json::from_str(body).unwrap_or_else(|_| json!(body));
        }
        value
    }
}
