use ctp_client::{ClientConfig, ClientError};

#[test]
fn client_config_default() {
    let cfg = ClientConfig::default();
    assert!(cfg.project_key.is_empty());
    assert!(cfg.access_token.is_empty());
    assert_eq!(cfg.api_url, "https://api.europe-west1.gcp.commercetools.com");
    assert_eq!(cfg.timeout_secs, 30);
}

#[test]
fn client_config_debug_redacts_token() {
    let cfg = ClientConfig {
        access_token: "super-secret".to_string(),
        ..Default::default()
    };
    let debug = format!("{:?}", cfg);
    assert!(!debug.contains("super-secret"));
    assert!(debug.contains("<redacted>"));
    assert!(debug.contains("api_url"));
}

#[test]
fn client_config_serde_uses_camel_case_and_defaults() {
    let cfg: ClientConfig =
        serde_json::from_str(r#"{ "projectKey": "proj", "accessToken": "t" }"#).unwrap();
    assert_eq!(cfg.project_key, "proj");
    assert_eq!(cfg.access_token, "t");
    assert_eq!(cfg.timeout_secs, 30);
    assert!(cfg.validate().is_ok());
}

#[test]
fn client_config_project_url_trims_trailing_slash() {
    let cfg = ClientConfig {
        project_key: "proj".to_string(),
        api_url: "http://localhost:8080/".to_string(),
        ..Default::default()
    };
    assert_eq!(cfg.project_url(), "http://localhost:8080/proj");
}

#[test]
fn client_config_project_url_encodes_project_key() {
    let cfg = ClientConfig {
        project_key: "my proj/eu".to_string(),
        api_url: "http://localhost:8080".to_string(),
        ..Default::default()
    };
    assert_eq!(cfg.project_url(), "http://localhost:8080/my%20proj%2Feu");
}

#[test]
fn client_config_validation_errors() {
    let valid = ClientConfig {
        project_key: "proj".to_string(),
        access_token: "t".to_string(),
        ..Default::default()
    };
    assert!(valid.validate().is_ok());

    let cases = [
        ClientConfig {
            project_key: String::new(),
            ..valid.clone()
        },
        ClientConfig {
            access_token: " ".to_string(),
            ..valid.clone()
        },
        ClientConfig {
            api_url: "ftp://example.com".to_string(),
            ..valid.clone()
        },
        ClientConfig {
            timeout_secs: 0,
            ..valid.clone()
        },
    ];
    for cfg in cases {
        assert!(matches!(cfg.validate(), Err(ClientError::Config(_))));
    }
}
