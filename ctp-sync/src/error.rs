//! Error types for reconciliation.

use ctp_client::ClientError;
use std::fmt;
use thiserror::Error;

/// Result type for reconcile operations.
pub type ReconcileResult<T> = Result<T, ReconcileError>;

/// The remote call a reconciliation failed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReconcileStage {
    /// Lookup by key.
    Fetch,
    /// Creation of a missing type.
    Create,
    /// Versioned update of an existing type.
    Update,
}

impl ReconcileStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReconcileStage::Fetch => "fetch",
            ReconcileStage::Create => "create",
            ReconcileStage::Update => "update",
        }
    }
}

impl fmt::Display for ReconcileStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed reconciliation of one type.
///
/// Carries the draft key so callers never have to parse the message to
/// find out which type failed, and the serialized client error as `cause`.
#[derive(Debug, Error)]
#[error("failed to sync type (key={key}) during {stage}: {cause}")]
pub struct ReconcileError {
    key: String,
    stage: ReconcileStage,
    cause: String,
    #[source]
    source: ClientError,
}

impl ReconcileError {
    pub fn new(key: impl Into<String>, stage: ReconcileStage, source: ClientError) -> Self {
        Self {
            key: key.into(),
            stage,
            cause: source.to_json().to_string(),
            source,
        }
    }

    /// Key of the draft that failed.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn stage(&self) -> ReconcileStage {
        self.stage
    }

    /// The underlying error serialized as JSON.
    pub fn cause(&self) -> &str {
        &self.cause
    }

    pub fn client_error(&self) -> &ClientError {
        &self.source
    }

    /// HTTP status of the underlying failure, if any.
    pub fn status(&self) -> Option<u16> {
        self.source.status()
    }
}

/// Errors from the start-up bootstrap.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// A bundled draft failed to load.
    #[error("invalid type draft: {0}")]
    Draft(#[from] ctp_types::Error),

    /// Reconciliation of a draft failed.
    #[error(transparent)]
    Reconcile(#[from] ReconcileError),
}
