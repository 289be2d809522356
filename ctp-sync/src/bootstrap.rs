//! Start-up reconciliation of the extension's custom types.

use crate::context::ReconcileContext;
use crate::error::{BootstrapError, ReconcileError, ReconcileResult};
use crate::reconciler::{ReconcileOutcome, TypeReconciler};
use ctp_types::{interface_interaction_type_draft, payment_custom_type_draft, TypeDraft};
use futures::future::join_all;
use tracing::{info, warn};

/// Result of reconciling one draft during bootstrap.
#[derive(Debug)]
pub struct TypeReport {
    pub key: String,
    pub result: ReconcileResult<ReconcileOutcome>,
}

/// Per-key results of a bootstrap, in draft order.
#[derive(Debug, Default)]
pub struct BootstrapReport {
    pub reports: Vec<TypeReport>,
}

impl BootstrapReport {
    pub fn is_success(&self) -> bool {
        self.reports.iter().all(|r| r.result.is_ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = &ReconcileError> {
        self.reports.iter().filter_map(|r| r.result.as_ref().err())
    }

    /// Outcome for `key`, if it was reconciled successfully.
    pub fn outcome(&self, key: &str) -> Option<&ReconcileOutcome> {
        self.reports
            .iter()
            .find(|r| r.key == key)
            .and_then(|r| r.result.as_ref().ok())
    }
}

/// Reconciles the payment custom type.
pub async fn ensure_payment_custom_type(
    reconciler: &TypeReconciler,
    ctx: &ReconcileContext,
) -> Result<ReconcileOutcome, BootstrapError> {
    let draft = payment_custom_type_draft()?;
    Ok(reconciler.reconcile(ctx, &draft).await?)
}

/// Reconciles the payment interface interaction custom type.
pub async fn ensure_interface_interaction_custom_type(
    reconciler: &TypeReconciler,
    ctx: &ReconcileContext,
) -> Result<ReconcileOutcome, BootstrapError> {
    let draft = interface_interaction_type_draft()?;
    Ok(reconciler.reconcile(ctx, &draft).await?)
}

/// Reconciles every draft concurrently.
///
/// Runs are independent: one key failing does not cancel the others, and
/// the caller decides from the report whether start-up may proceed.
pub async fn ensure_all(
    reconciler: &TypeReconciler,
    ctx: &ReconcileContext,
    drafts: &[TypeDraft],
) -> BootstrapReport {
    let results = join_all(drafts.iter().map(|d| reconciler.reconcile(ctx, d))).await;

    let reports: Vec<TypeReport> = drafts
        .iter()
        .zip(results)
        .map(|(draft, result)| TypeReport {
            key: draft.key.clone(),
            result,
        })
        .collect();

    let failed = reports.iter().filter(|r| r.result.is_err()).count();
    if failed == 0 {
        info!(
            commercetools_project_key = %ctx.project_key(),
            types = reports.len(),
            "custom types reconciled"
        );
    } else {
        warn!(
            commercetools_project_key = %ctx.project_key(),
            types = reports.len(),
            failed,
            "custom type reconciliation finished with failures"
        );
    }

    BootstrapReport { reports }
}

/// Reconciles both bundled drafts concurrently.
pub async fn ensure_bundled_types(
    reconciler: &TypeReconciler,
    ctx: &ReconcileContext,
) -> Result<BootstrapReport, BootstrapError> {
    let drafts = [payment_custom_type_draft()?, interface_interaction_type_draft()?];
    Ok(ensure_all(reconciler, ctx, &drafts).await)
}
