//! Core type definitions for the commercetools Adyen extension.
//!
//! This crate defines the plain data the rest of the workspace passes around:
//! - Custom type drafts (desired state) and remote types (platform state)
//! - The closed set of type update actions and the policy that decides which
//!   of them may be submitted to the platform
//! - Shared keys and custom field names
//! - The two type drafts the extension keeps reconciled at start-up
//!
//! Nothing here performs I/O.

mod action;
pub mod constants;
mod drafts;
mod localized;
mod type_def;

pub use action::{ActionBatch, ActionKind, ActionPolicy, ResourceKind, UpdateAction};
pub use drafts::{interface_interaction_type_draft, payment_custom_type_draft};
pub use localized::LocalizedString;
pub use type_def::{
    EnumValue, FieldDefinition, FieldType, InputHint, LocalizedEnumValue, RemoteType, TypeDraft,
};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or validating type definitions.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Draft JSON could not be parsed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Draft key is empty.
    #[error("type draft has an empty key")]
    EmptyKey,

    /// Two field definitions share a name.
    #[error("type draft {key} defines field {field} more than once")]
    DuplicateField { key: String, field: String },
}
