//! End-to-end reconciliation against a mocked platform API.

use ctp_client::{ClientConfig, CtpClient};
use ctp_sync::{ReconcileContext, ReconcileOutcome, ReconcileStage, TypeReconciler};
use ctp_types::{ActionKind, FieldDefinition, LocalizedString, TypeDraft};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn reconciler(server: &MockServer) -> TypeReconciler {
    let client = CtpClient::new(ClientConfig {
        project_key: "proj".to_string(),
        api_url: server.uri(),
        access_token: "token".to_string(),
        ..Default::default()
    })
    .unwrap();
    TypeReconciler::new(Arc::new(client))
}

fn draft(fields: &[&str]) -> TypeDraft {
    TypeDraft {
        key: "t1".to_string(),
        name: LocalizedString::en("Test"),
        description: None,
        resource_type_ids: vec!["payment".to_string()],
        field_definitions: fields
            .iter()
            .map(|n| FieldDefinition::string(*n, LocalizedString::en(*n)))
            .collect(),
    }
}

fn field_json(name: &str) -> Value {
    json!({
        "name": name,
        "label": { "en": name },
        "required": false,
        "type": { "name": "String" },
        "inputHint": "SingleLine"
    })
}

fn remote_json(fields: &[&str], version: u64) -> Value {
    json!({
        "id": "type-id-1",
        "version": version,
        "key": "t1",
        "name": { "en": "Test" },
        "resourceTypeIds": ["payment"],
        "fieldDefinitions": fields.iter().map(|f| field_json(f)).collect::<Vec<_>>(),
    })
}

fn ctx() -> ReconcileContext {
    ReconcileContext::new("proj")
}

// ── Create ──────────────────────────────────────────────────────

#[tokio::test]
async fn missing_type_is_posted_to_the_collection() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/proj/types/key=t1"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "statusCode": 404,
            "message": "The Resource with key 't1' was not found."
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/proj/types"))
        .respond_with(ResponseTemplate::new(201).set_body_json(remote_json(&["A"], 1)))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = reconciler(&server)
        .reconcile(&ctx(), &draft(&["A"]))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        ReconcileOutcome::Created {
            id: "type-id-1".to_string(),
            version: 1
        }
    );
}

// ── Update ──────────────────────────────────────────────────────

#[tokio::test]
async fn update_carries_fetched_version_and_filtered_actions() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/proj/types/key=t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(remote_json(&["A", "C"], 3)))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/proj/types/type-id-1"))
        .and(body_json(json!({
            "version": 3,
            "actions": [{ "action": "addFieldDefinition", "fieldDefinition": field_json("B") }]
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(remote_json(&["A", "C", "B"], 4)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let outcome = reconciler(&server)
        .reconcile(&ctx(), &draft(&["A", "B", "C"]))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        ReconcileOutcome::Updated {
            id: "type-id-1".to_string(),
            version: 4,
            applied: vec![ActionKind::AddFieldDefinition],
            withheld: vec![ActionKind::ChangeFieldDefinitionOrder],
        }
    );

    let requests = server.received_requests().await.unwrap();
    let update: &Request = requests.iter().find(|r| r.method.as_str() == "POST").unwrap();
    let body: Value = serde_json::from_slice(&update.body).unwrap();
    assert!(!body.to_string().contains("changeFieldDefinitionOrder"));
}

#[tokio::test]
async fn reorder_only_sends_no_write() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/proj/types/key=t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(remote_json(&["A", "B"], 9)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let outcome = reconciler(&server)
        .reconcile(&ctx(), &draft(&["B", "A"]))
        .await
        .unwrap();

    assert_eq!(outcome.label(), "unchanged");
    assert_eq!(outcome.version(), 9);
}

#[tokio::test]
async fn stale_version_is_reported_as_conflict() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/proj/types/key=t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(remote_json(&["A"], 3)))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/proj/types/type-id-1"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "statusCode": 409,
            "errors": [{ "code": "ConcurrentModification", "currentVersion": 4 }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = reconciler(&server)
        .reconcile(&ctx(), &draft(&["A", "B"]))
        .await
        .unwrap_err();

    assert_eq!(err.stage(), ReconcileStage::Update);
    assert!(err.client_error().is_conflict());
    assert!(err.cause().contains("ConcurrentModification"));
}

// ── Lookup failures ─────────────────────────────────────────────

#[tokio::test]
async fn server_error_on_lookup_never_creates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/proj/types/key=t1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let err = reconciler(&server)
        .reconcile(&ctx(), &draft(&["A"]))
        .await
        .unwrap_err();

    assert_eq!(err.key(), "t1");
    assert_eq!(err.stage(), ReconcileStage::Fetch);
    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("failed to sync type (key=t1)"));
}

#[tokio::test]
async fn unauthorized_lookup_is_a_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "statusCode": 401,
            "error": "invalid_token"
        })))
        .mount(&server)
        .await;

    let err = reconciler(&server)
        .reconcile(&ctx(), &draft(&["A"]))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(401));
    let cause: Value = serde_json::from_str(err.cause()).unwrap();
    assert_eq!(cause["body"]["error"], "invalid_token");
}
