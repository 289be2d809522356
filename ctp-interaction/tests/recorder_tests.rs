use chrono::{TimeZone, Utc};
use ctp_interaction::{
    InteractionKind, InteractionRecorder, PaymentAction, TypeResourceIdentifier,
};
use ctp_types::constants::INTERACTION_CUSTOM_TYPE_KEY;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn default_recorder_targets_the_interaction_type() {
    assert_eq!(
        InteractionRecorder::default().type_key(),
        INTERACTION_CUSTOM_TYPE_KEY
    );
}

#[test]
fn record_serializes_request_and_response() {
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
    let action = InteractionRecorder::default()
        .record_at(
            &json!({ "amount": { "value": 1000, "currency": "EUR" } }),
            &json!({ "resultCode": "Authorised" }),
            InteractionKind::MakePayment,
            at,
        )
        .unwrap();

    let PaymentAction::AddInterfaceInteraction { type_ref, fields } = action else {
        panic!("expected an interaction");
    };
    assert_eq!(
        type_ref,
        TypeResourceIdentifier {
            key: INTERACTION_CUSTOM_TYPE_KEY.to_string()
        }
    );
    assert_eq!(fields.kind, "makePayment");
    assert_eq!(fields.created_at, "2024-03-01T12:30:00.000Z");
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&fields.request).unwrap(),
        json!({ "amount": { "value": 1000, "currency": "EUR" } })
    );
    assert_eq!(fields.response, r#"{"resultCode":"Authorised"}"#);
}

#[test]
fn recorded_action_has_platform_wire_shape() {
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    let action = InteractionRecorder::new("custom-key")
        .record_at(&json!({}), &json!([]), InteractionKind::Refund, at)
        .unwrap();

    assert_eq!(action.name(), "addInterfaceInteraction");
    assert_eq!(
        serde_json::to_value(&action).unwrap(),
        json!({
            "action": "addInterfaceInteraction",
            "type": { "key": "custom-key" },
            "fields": {
                "type": "refund",
                "request": "{}",
                "response": "[]",
                "createdAt": "2024-03-01T00:00:00.000Z"
            }
        })
    );
}

#[test]
fn record_uses_current_time() {
    let before = Utc::now();
    let action = InteractionRecorder::default()
        .record(&json!({}), &json!({}), InteractionKind::CancelPayment)
        .unwrap();

    let PaymentAction::AddInterfaceInteraction { fields, .. } = action else {
        panic!("expected an interaction");
    };
    let created = chrono::DateTime::parse_from_rfc3339(&fields.created_at).unwrap();
    assert!(created.timestamp() >= before.timestamp());
}

#[test]
fn kinds_use_camel_case_names() {
    let names: Vec<&str> = InteractionKind::ALL.iter().map(|k| k.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "cancelPayment",
            "getPaymentMethods",
            "makePayment",
            "submitAdditionalPaymentDetails",
            "manualCapture",
            "refund",
            "getCarbonOffsetCosts",
        ]
    );
    for kind in InteractionKind::ALL {
        assert_eq!(
            serde_json::to_value(kind).unwrap(),
            json!(kind.to_string())
        );
    }
}
