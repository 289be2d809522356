//! Payment update actions produced by the handlers.

use serde::{Deserialize, Serialize};

/// Reference to a custom type by key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeResourceIdentifier {
    pub key: String,
}

/// Custom fields of one interface interaction.
///
/// `request` and `response` hold serialized JSON; `created_at` is RFC 3339.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionFields {
    #[serde(rename = "type")]
    pub kind: String,
    pub request: String,
    pub response: String,
    pub created_at: String,
}

/// A payment update action, in the shape the platform expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum PaymentAction {
    #[serde(rename_all = "camelCase")]
    AddInterfaceInteraction {
        #[serde(rename = "type")]
        type_ref: TypeResourceIdentifier,
        fields: InteractionFields,
    },

    #[serde(rename_all = "camelCase")]
    SetCustomField { name: String, value: String },
}

impl PaymentAction {
    /// The `action` value used on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            PaymentAction::AddInterfaceInteraction { .. } => "addInterfaceInteraction",
            PaymentAction::SetCustomField { .. } => "setCustomField",
        }
    }
}
