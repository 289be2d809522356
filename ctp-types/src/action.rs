//! Type update actions and the submission policy.
//!
//! [`UpdateAction`] is the closed set of changes the diff engine may emit for
//! a custom type. Not every emitted action is accepted by the platform, so
//! the only thing an update call accepts is an [`ActionBatch`], which can be
//! built solely through [`ActionPolicy::filter`].

use crate::localized::LocalizedString;
use crate::type_def::{EnumValue, FieldDefinition, InputHint, LocalizedEnumValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// One atomic change to a remote custom type.
///
/// Serialized with an `action` discriminator, the shape the platform's
/// update endpoint expects. No variant changes `key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum UpdateAction {
    #[serde(rename_all = "camelCase")]
    ChangeName { name: LocalizedString },

    #[serde(rename_all = "camelCase")]
    SetDescription {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<LocalizedString>,
    },

    #[serde(rename_all = "camelCase")]
    AddFieldDefinition { field_definition: FieldDefinition },

    #[serde(rename_all = "camelCase")]
    RemoveFieldDefinition { field_name: String },

    #[serde(rename_all = "camelCase")]
    ChangeLabel {
        field_name: String,
        label: LocalizedString,
    },

    #[serde(rename_all = "camelCase")]
    ChangeInputHint {
        field_name: String,
        input_hint: InputHint,
    },

    #[serde(rename_all = "camelCase")]
    AddEnumValue { field_name: String, value: EnumValue },

    #[serde(rename_all = "camelCase")]
    AddLocalizedEnumValue {
        field_name: String,
        value: LocalizedEnumValue,
    },

    #[serde(rename_all = "camelCase")]
    ChangeEnumValueLabel { field_name: String, value: EnumValue },

    #[serde(rename_all = "camelCase")]
    ChangeLocalizedEnumValueLabel {
        field_name: String,
        value: LocalizedEnumValue,
    },

    #[serde(rename_all = "camelCase")]
    ChangeFieldDefinitionOrder { field_names: Vec<String> },
}

impl UpdateAction {
    /// The discriminator of this action.
    pub fn kind(&self) -> ActionKind {
        match self {
            UpdateAction::ChangeName { .. } => ActionKind::ChangeName,
            UpdateAction::SetDescription { .. } => ActionKind::SetDescription,
            UpdateAction::AddFieldDefinition { .. } => ActionKind::AddFieldDefinition,
            UpdateAction::RemoveFieldDefinition { .. } => ActionKind::RemoveFieldDefinition,
            UpdateAction::ChangeLabel { .. } => ActionKind::ChangeLabel,
            UpdateAction::ChangeInputHint { .. } => ActionKind::ChangeInputHint,
            UpdateAction::AddEnumValue { .. } => ActionKind::AddEnumValue,
            UpdateAction::AddLocalizedEnumValue { .. } => ActionKind::AddLocalizedEnumValue,
            UpdateAction::ChangeEnumValueLabel { .. } => ActionKind::ChangeEnumValueLabel,
            UpdateAction::ChangeLocalizedEnumValueLabel { .. } => {
                ActionKind::ChangeLocalizedEnumValueLabel
            }
            UpdateAction::ChangeFieldDefinitionOrder { .. } => {
                ActionKind::ChangeFieldDefinitionOrder
            }
        }
    }
}

/// Payload-free mirror of the [`UpdateAction`] discriminators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionKind {
    ChangeName,
    SetDescription,
    AddFieldDefinition,
    RemoveFieldDefinition,
    ChangeLabel,
    ChangeInputHint,
    AddEnumValue,
    AddLocalizedEnumValue,
    ChangeEnumValueLabel,
    ChangeLocalizedEnumValueLabel,
    ChangeFieldDefinitionOrder,
}

impl ActionKind {
    /// The `action` value used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::ChangeName => "changeName",
            ActionKind::SetDescription => "setDescription",
            ActionKind::AddFieldDefinition => "addFieldDefinition",
            ActionKind::RemoveFieldDefinition => "removeFieldDefinition",
            ActionKind::ChangeLabel => "changeLabel",
            ActionKind::ChangeInputHint => "changeInputHint",
            ActionKind::AddEnumValue => "addEnumValue",
            ActionKind::AddLocalizedEnumValue => "addLocalizedEnumValue",
            ActionKind::ChangeEnumValueLabel => "changeEnumValueLabel",
            ActionKind::ChangeLocalizedEnumValueLabel => "changeLocalizedEnumValueLabel",
            ActionKind::ChangeFieldDefinitionOrder => "changeFieldDefinitionOrder",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform resource shapes that have their own set of rejected actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ResourceKind {
    /// Custom type definitions (`/types`).
    Type,
}

/// Decides which action kinds may be submitted for a resource.
///
/// The default policy excludes nothing; use [`ActionPolicy::for_resource`]
/// to get the exclusions the platform is known to enforce.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionPolicy {
    excluded: BTreeSet<ActionKind>,
}

impl ActionPolicy {
    /// The policy for a platform resource kind.
    ///
    /// For custom types, `changeFieldDefinitionOrder` is always excluded:
    /// the platform rejects the `fieldNames` payload the diff produces with
    /// a 400.
    pub fn for_resource(kind: ResourceKind) -> Self {
        match kind {
            ResourceKind::Type => Self::excluding([ActionKind::ChangeFieldDefinitionOrder]),
        }
    }

    /// A policy excluding exactly the given kinds.
    pub fn excluding(kinds: impl IntoIterator<Item = ActionKind>) -> Self {
        Self {
            excluded: kinds.into_iter().collect(),
        }
    }

    /// Adds one more excluded kind.
    #[must_use]
    pub fn with_exclusion(mut self, kind: ActionKind) -> Self {
        self.excluded.insert(kind);
        self
    }

    pub fn allows(&self, kind: ActionKind) -> bool {
        !self.excluded.contains(&kind)
    }

    /// Excluded kinds in a stable order.
    pub fn excluded(&self) -> impl Iterator<Item = ActionKind> + '_ {
        self.excluded.iter().copied()
    }

    /// Splits `actions` into a submittable batch and the withheld rest.
    ///
    /// Relative order of the kept actions is preserved.
    pub fn filter(&self, actions: Vec<UpdateAction>) -> ActionBatch {
        let (actions, withheld): (Vec<_>, Vec<_>) = actions
            .into_iter()
            .partition(|action| self.allows(action.kind()));
        ActionBatch { actions, withheld }
    }
}

/// Actions cleared for submission by an [`ActionPolicy`].
///
/// Has no public constructor: every batch passed to an update call has been
/// through a policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionBatch {
    actions: Vec<UpdateAction>,
    withheld: Vec<UpdateAction>,
}

impl ActionBatch {
    /// Actions to submit, in diff order.
    pub fn actions(&self) -> &[UpdateAction] {
        &self.actions
    }

    /// Actions the policy removed.
    pub fn withheld(&self) -> &[UpdateAction] {
        &self.withheld
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn kinds(&self) -> Vec<ActionKind> {
        self.actions.iter().map(UpdateAction::kind).collect()
    }

    pub fn into_actions(self) -> Vec<UpdateAction> {
        self.actions
    }
}
