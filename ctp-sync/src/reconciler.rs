//! The type reconciler: fetch, create-or-diff, filter, apply.

use crate::context::ReconcileContext;
use crate::diff::{DiffEngine, TypeDiff};
use crate::error::{ReconcileError, ReconcileResult, ReconcileStage};
use ctp_client::{ClientError, Lookup, TypeRepository};
use ctp_types::{ActionKind, ActionPolicy, RemoteType, ResourceKind, TypeDraft};
use std::sync::Arc;
use tracing::{debug, error, info, Instrument};

/// What a successful reconciliation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// The type did not exist and was created from the draft.
    Created { id: String, version: u64 },
    /// One update carrying `applied` was written.
    Updated {
        id: String,
        version: u64,
        applied: Vec<ActionKind>,
        withheld: Vec<ActionKind>,
    },
    /// Nothing submittable was left after filtering; no write happened.
    Unchanged {
        id: String,
        version: u64,
        withheld: Vec<ActionKind>,
    },
}

impl ReconcileOutcome {
    /// Short label for logs and reports.
    pub fn label(&self) -> &'static str {
        match self {
            ReconcileOutcome::Created { .. } => "created",
            ReconcileOutcome::Updated { .. } => "updated",
            ReconcileOutcome::Unchanged { .. } => "unchanged",
        }
    }

    /// Whether a write was sent to the platform.
    pub fn wrote(&self) -> bool {
        !matches!(self, ReconcileOutcome::Unchanged { .. })
    }

    /// Version of the remote type after the run.
    pub fn version(&self) -> u64 {
        match self {
            ReconcileOutcome::Created { version, .. }
            | ReconcileOutcome::Updated { version, .. }
            | ReconcileOutcome::Unchanged { version, .. } => *version,
        }
    }
}

/// Reconciles custom type drafts against the platform.
///
/// Stateless between calls; one instance can serve any number of keys,
/// including concurrently.
pub struct TypeReconciler {
    repository: Arc<dyn TypeRepository>,
    diff: Arc<dyn DiffEngine>,
    policy: ActionPolicy,
}

impl TypeReconciler {
    /// Creates a reconciler with [`TypeDiff`] and the custom type policy.
    pub fn new(repository: Arc<dyn TypeRepository>) -> Self {
        Self {
            repository,
            diff: Arc::new(TypeDiff),
            policy: ActionPolicy::for_resource(ResourceKind::Type),
        }
    }

    /// Replaces the diff engine.
    #[must_use]
    pub fn with_diff(mut self, diff: Arc<dyn DiffEngine>) -> Self {
        self.diff = diff;
        self
    }

    /// Replaces the action policy.
    #[must_use]
    pub fn with_policy(mut self, policy: ActionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &ActionPolicy {
        &self.policy
    }

    /// Brings the remote type keyed by `desired.key` in line with `desired`.
    ///
    /// Performs at most one write: a create when the type is missing, or a
    /// single update guarded by the fetched version. Any lookup failure other
    /// than "not found" aborts before a write is attempted.
    pub async fn reconcile(
        &self,
        ctx: &ReconcileContext,
        desired: &TypeDraft,
    ) -> ReconcileResult<ReconcileOutcome> {
        async {
            self.run(desired).await.inspect_err(|e| {
                error!(
                    stage = %e.stage(),
                    cause = %e.cause(),
                    "Failed to sync type (key={})",
                    e.key()
                );
            })
        }
        .instrument(ctx.span(&desired.key))
        .await
    }

    async fn run(&self, desired: &TypeDraft) -> ReconcileResult<ReconcileOutcome> {
        let current = match self.repository.fetch_by_key(&desired.key).await {
            Ok(Lookup::Found(current)) => current,
            Ok(Lookup::NotFound) => return self.create(desired).await,
            Err(e) => return Err(wrap(desired, ReconcileStage::Fetch, e)),
        };
        self.update(desired, current).await
    }

    async fn create(&self, desired: &TypeDraft) -> ReconcileResult<ReconcileOutcome> {
        debug!("type not found, creating it");
        let created = self
            .repository
            .create(desired)
            .await
            .map_err(|e| wrap(desired, ReconcileStage::Create, e))?;

        info!(
            version = created.version,
            "Successfully created the type (key={})", desired.key
        );
        Ok(ReconcileOutcome::Created {
            id: created.id,
            version: created.version,
        })
    }

    async fn update(
        &self,
        desired: &TypeDraft,
        current: RemoteType,
    ) -> ReconcileResult<ReconcileOutcome> {
        let actions = self.diff.build_actions(desired, &current);
        let batch = self.policy.filter(actions);

        let withheld: Vec<ActionKind> = batch.withheld().iter().map(|a| a.kind()).collect();
        for kind in &withheld {
            debug!(action = %kind, "withholding action the platform rejects for this resource");
        }

        if batch.is_empty() {
            info!(
                version = current.version,
                "type already up to date (key={})", desired.key
            );
            return Ok(ReconcileOutcome::Unchanged {
                id: current.id,
                version: current.version,
                withheld,
            });
        }

        let applied = batch.kinds();
        debug!(
            version = current.version,
            actions = applied.len(),
            "submitting update"
        );
        let updated = self
            .repository
            .update(&current.id, current.version, &batch)
            .await
            .map_err(|e| wrap(desired, ReconcileStage::Update, e))?;

        info!(
            version = updated.version,
            actions = applied.len(),
            "Successfully updated the type (key={})", desired.key
        );
        Ok(ReconcileOutcome::Updated {
            id: updated.id,
            version: updated.version,
            applied,
            withheld,
        })
    }
}

fn wrap(desired: &TypeDraft, stage: ReconcileStage, source: ClientError) -> ReconcileError {
    ReconcileError::new(desired.key.clone(), stage, source)
}
