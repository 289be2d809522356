use ctp_client::{ClientConfig, ClientError, CtpClient, Lookup, TypeRepository};
use ctp_types::{
    ActionPolicy, FieldDefinition, LocalizedString, ResourceKind, TypeDraft, UpdateAction,
};
use pretty_assertions::assert_eq;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_config(server: &MockServer) -> ClientConfig {
    ClientConfig {
        project_key: "proj".to_string(),
        api_url: server.uri(),
        access_token: "token-123".to_string(),
        ..Default::default()
    }
}

fn draft() -> TypeDraft {
    TypeDraft {
        key: "t1".to_string(),
        name: LocalizedString::en("Test"),
        description: None,
        resource_type_ids: vec!["payment".to_string()],
        field_definitions: vec![FieldDefinition::string("A", LocalizedString::en("A"))],
    }
}

fn remote_json(version: u64) -> serde_json::Value {
    serde_json::json!({
        "id": "type-id-1",
        "version": version,
        "key": "t1",
        "name": { "en": "Test" },
        "resourceTypeIds": ["payment"],
        "fieldDefinitions": [{
            "name": "A",
            "label": { "en": "A" },
            "required": false,
            "type": { "name": "String" },
            "inputHint": "SingleLine"
        }],
        "createdAt": "2024-01-01T00:00:00.000Z"
    })
}

// ── Construction ────────────────────────────────────────────────

#[test]
fn new_rejects_invalid_config() {
    let result = CtpClient::new(ClientConfig::default());
    assert!(matches!(result, Err(ClientError::Config(_))));
}

#[tokio::test]
async fn new_accepts_valid_config() {
    let server = MockServer::start().await;
    let client = CtpClient::new(mock_config(&server)).unwrap();
    assert_eq!(client.project_key(), "proj");
}

// ── fetch_by_key ────────────────────────────────────────────────

#[tokio::test]
async fn fetch_by_key_returns_found_resource() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/proj/types/key=t1"))
        .and(header("authorization", "Bearer token-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(remote_json(3)))
        .expect(1)
        .mount(&server)
        .await;

    let client = CtpClient::new(mock_config(&server)).unwrap();
    let lookup = client.fetch_by_key("t1").await.unwrap();

    match lookup {
        Lookup::Found(remote) => {
            assert_eq!(remote.id, "type-id-1");
            assert_eq!(remote.version, 3);
            assert_eq!(remote.field_names(), vec!["A"]);
        }
        Lookup::NotFound => panic!("expected a resource"),
    }
}

#[tokio::test]
async fn fetch_by_key_maps_404_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/proj/types/key=missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "statusCode": 404,
            "message": "The Resource with key 'missing' was not found."
        })))
        .mount(&server)
        .await;

    let client = CtpClient::new(mock_config(&server)).unwrap();
    let lookup = client.fetch_by_key("missing").await.unwrap();
    assert_eq!(lookup, Lookup::NotFound);
}

#[tokio::test]
async fn fetch_by_key_other_status_is_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/proj/types/key=t1"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "statusCode": 401,
            "message": "invalid_token"
        })))
        .mount(&server)
        .await;

    let client = CtpClient::new(mock_config(&server)).unwrap();
    let err = client.fetch_by_key("t1").await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert!(matches!(err, ClientError::Status { status: 401, .. }));
}

#[tokio::test]
async fn fetch_by_key_undecodable_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/proj/types/key=t1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = CtpClient::new(mock_config(&server)).unwrap();
    let err = client.fetch_by_key("t1").await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

// ── create ──────────────────────────────────────────────────────

#[tokio::test]
async fn create_posts_draft() {
    let server = MockServer::start().await;
    let draft = draft();

    Mock::given(method("POST"))
        .and(path("/proj/types"))
        .and(body_json(serde_json::to_value(&draft).unwrap()))
        .respond_with(ResponseTemplate::new(201).set_body_json(remote_json(1)))
        .expect(1)
        .mount(&server)
        .await;

    let client = CtpClient::new(mock_config(&server)).unwrap();
    let created = client.create(&draft).await.unwrap();
    assert_eq!(created.version, 1);
    assert_eq!(created.as_draft().field_definitions, draft.field_definitions);
}

#[tokio::test]
async fn create_duplicate_is_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/proj/types"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "statusCode": 400,
            "message": "A duplicate value '\"t1\"' exists for field 'key'.",
            "errors": [{ "code": "DuplicateValue" }]
        })))
        .mount(&server)
        .await;

    let client = CtpClient::new(mock_config(&server)).unwrap();
    let err = client.create(&draft()).await.unwrap_err();
    assert_eq!(err.status(), Some(400));

    let json = err.to_json();
    assert_eq!(json["kind"], "status");
    assert_eq!(json["body"]["errors"][0]["code"], "DuplicateValue");
}

// ── update ──────────────────────────────────────────────────────

#[tokio::test]
async fn update_posts_version_and_filtered_actions() {
    let server = MockServer::start().await;

    let add_b = UpdateAction::AddFieldDefinition {
        field_definition: FieldDefinition::string("B", LocalizedString::en("B")),
    };
    let batch = ActionPolicy::for_resource(ResourceKind::Type).filter(vec![
        add_b.clone(),
        UpdateAction::ChangeFieldDefinitionOrder {
            field_names: vec!["B".to_string(), "A".to_string()],
        },
    ]);

    Mock::given(method("POST"))
        .and(path("/proj/types/type-id-1"))
        .and(body_json(serde_json::json!({
            "version": 3,
            "actions": [serde_json::to_value(&add_b).unwrap()]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(remote_json(4)))
        .expect(1)
        .mount(&server)
        .await;

    let client = CtpClient::new(mock_config(&server)).unwrap();
    let updated = client.update("type-id-1", 3, &batch).await.unwrap();
    assert_eq!(updated.version, 4);
}

#[tokio::test]
async fn update_version_conflict_is_conflict_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/proj/types/type-id-1"))
        .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
            "statusCode": 409,
            "errors": [{ "code": "ConcurrentModification", "currentVersion": 4 }]
        })))
        .mount(&server)
        .await;

    let client = CtpClient::new(mock_config(&server)).unwrap();
    let batch = ActionPolicy::default().filter(vec![UpdateAction::ChangeName {
        name: LocalizedString::en("Renamed"),
    }]);
    let err = client.update("type-id-1", 3, &batch).await.unwrap_err();
    assert!(err.is_conflict());
    assert_eq!(err.status(), Some(409));
    assert_eq!(err.to_json()["body"]["errors"][0]["currentVersion"], 4);
}
