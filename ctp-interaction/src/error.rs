use crate::kind::InteractionKind;
use thiserror::Error;

pub type HandlerResult<T> = Result<T, HandlerError>;

/// Failure reported by a [`PaymentGateway`](crate::PaymentGateway).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct GatewayError {
    /// HTTP status of the processor response, when there was one.
    pub status: Option<u16>,
    pub message: String,
}

impl GatewayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }
}

/// Errors from payment handlers.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The payment carries no custom fields at all.
    #[error("payment has no custom fields")]
    NoCustomFields,

    /// A required custom field is absent.
    #[error("custom field {0} is missing")]
    MissingField(String),

    /// The request field holds malformed JSON.
    #[error("custom field {field} is not valid JSON: {source}")]
    InvalidRequest {
        field: String,
        #[source]
        source: serde_json::Error,
    },

    /// A custom field that should hold a string holds something else.
    #[error("custom field {0} must be a string")]
    NotAString(String),

    /// The payment gateway call failed.
    #[error("{kind} call failed: {source}")]
    Gateway {
        kind: InteractionKind,
        #[source]
        source: GatewayError,
    },

    /// A request or response could not be serialized.
    #[error("failed to serialize {0}: {1}")]
    Serialization(&'static str, serde_json::Error),
}
