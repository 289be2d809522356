use tracing::{info_span, Span};

/// Per-invocation logging context.
///
/// Passed explicitly into every reconcile call; each run opens its own span
/// carrying the project key and the type key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileContext {
    project_key: String,
}

impl ReconcileContext {
    pub fn new(project_key: impl Into<String>) -> Self {
        Self {
            project_key: project_key.into(),
        }
    }

    pub fn project_key(&self) -> &str {
        &self.project_key
    }

    /// Span for one reconciliation of `type_key`.
    pub fn span(&self, type_key: &str) -> Span {
        info_span!(
            "reconcile",
            commercetools_project_key = %self.project_key,
            type_key = %type_key,
        )
    }
}
