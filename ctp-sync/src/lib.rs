//! Custom type reconciliation for the commercetools Adyen extension.
//!
//! Brings a custom type on the platform in line with a locally declared
//! [`TypeDraft`](ctp_types::TypeDraft) without touching anything else on the
//! platform.
//!
//! ## Components
//!
//! - **Diff**: computes the ordered update actions turning the remote type
//!   into the draft
//! - **Reconciler**: fetch, create-or-diff, filter, apply
//! - **Bootstrap**: reconciles the extension's bundled drafts at start-up
//!
//! ## Reconciliation
//!
//! 1. **Fetch** the remote type by key; a missing type is created from the
//!    draft and the run ends
//! 2. **Diff** the draft against the remote copy
//! 3. **Filter** out action kinds the platform rejects for the resource
//! 4. **Apply** what is left in a single update guarded by the fetched
//!    version, or do nothing if nothing is left
//!
//! Failures are never retried here; they are returned as a
//! [`ReconcileError`] carrying the draft key.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use ctp_client::InMemoryTypeRepository;
//! use ctp_sync::{ReconcileContext, TypeReconciler};
//!
//! let repository = Arc::new(InMemoryTypeRepository::new());
//! let reconciler = TypeReconciler::new(repository);
//! let ctx = ReconcileContext::new("my-project");
//! assert_eq!(ctx.project_key(), "my-project");
//! # let _ = reconciler;
//! ```

mod bootstrap;
mod context;
mod diff;
mod error;
mod reconciler;

pub use bootstrap::{
    ensure_all, ensure_bundled_types, ensure_interface_interaction_custom_type,
    ensure_payment_custom_type, BootstrapReport, TypeReport,
};
pub use context::ReconcileContext;
pub use diff::{DiffEngine, TypeDiff};
pub use error::{BootstrapError, ReconcileError, ReconcileResult, ReconcileStage};
pub use reconciler::{ReconcileOutcome, TypeReconciler};
