use ctp_types::constants::{
    FIELD_ADYEN_MERCHANT_ACCOUNT, INTERACTION_CUSTOM_TYPE_KEY, INTERACTION_FIELD_CREATED_AT,
    INTERACTION_FIELD_REQUEST, INTERACTION_FIELD_RESPONSE, INTERACTION_FIELD_TYPE,
    PAYMENT_CUSTOM_TYPE_KEY,
};
use ctp_types::{interface_interaction_type_draft, payment_custom_type_draft, FieldType};

#[test]
fn bundled_drafts_parse_and_validate() {
    let payment = payment_custom_type_draft().unwrap();
    let interaction = interface_interaction_type_draft().unwrap();

    assert_eq!(payment.key, PAYMENT_CUSTOM_TYPE_KEY);
    assert_eq!(interaction.key, INTERACTION_CUSTOM_TYPE_KEY);
    assert_ne!(payment.key, interaction.key);
}

#[test]
fn payment_type_extends_payments() {
    let payment = payment_custom_type_draft().unwrap();
    assert_eq!(payment.resource_type_ids, vec!["payment"]);
    assert!(payment.field(FIELD_ADYEN_MERCHANT_ACCOUNT).is_some());
}

#[test]
fn interaction_type_defines_interaction_fields() {
    let interaction = interface_interaction_type_draft().unwrap();
    assert_eq!(
        interaction.resource_type_ids,
        vec!["payment-interface-interaction"]
    );
    for name in [
        INTERACTION_FIELD_TYPE,
        INTERACTION_FIELD_REQUEST,
        INTERACTION_FIELD_RESPONSE,
        INTERACTION_FIELD_CREATED_AT,
    ] {
        assert!(interaction.field(name).is_some(), "missing field {name}");
    }
    assert_eq!(
        interaction
            .field(INTERACTION_FIELD_CREATED_AT)
            .map(|f| &f.field_type),
        Some(&FieldType::DateTime)
    );
}
