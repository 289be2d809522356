//! The custom type drafts the extension keeps reconciled.
//!
//! Both documents are compiled into the binary; the bootstrap can still load
//! replacements from disk.

use crate::type_def::TypeDraft;
use crate::Result;

const PAYMENT_CUSTOM_TYPE_JSON: &str = include_str!("../resources/web-components-payment-type.json");
const INTERACTION_CUSTOM_TYPE_JSON: &str =
    include_str!("../resources/payment-interface-interaction-type.json");

/// Draft of the custom type attached to payments.
pub fn payment_custom_type_draft() -> Result<TypeDraft> {
    TypeDraft::from_json(PAYMENT_CUSTOM_TYPE_JSON)
}

/// Draft of the custom type attached to payment interface interactions.
pub fn interface_interaction_type_draft() -> Result<TypeDraft> {
    TypeDraft::from_json(INTERACTION_CUSTOM_TYPE_JSON)
}
