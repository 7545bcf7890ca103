//! Dispatch client tests against a simulated WhatsApp gateway.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use case_notification_service::config::WhatsAppConfig;
use case_notification_service::dispatch::{DispatchErrorKind, WhatsAppClient};
use case_notification_service::renderer::{CaseOutcome, MessageRenderer};
use case_notification_service::template::{install_defaults, MemoryTemplateStore, TemplateStore};

fn gateway_config(uri: &str) -> WhatsAppConfig {
    WhatsAppConfig {
        api_key: Some("test-key".to_string()),
        api_url: format!("{}/as/whatsapp/send", uri),
        from_number: None,
        test_mode: false,
        test_number: "+59179397462".to_string(),
        timeout_seconds: 1,
    }
}

fn client_with_defaults(config: WhatsAppConfig) -> WhatsAppClient {
    let store: Arc<dyn TemplateStore> = Arc::new(MemoryTemplateStore::new());
    install_defaults(store.as_ref());
    WhatsAppClient::new(config, MessageRenderer::new(store))
}

#[tokio::test]
async fn successful_dispatch_returns_provider_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/as/whatsapp/send"))
        .and(header("apikey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "abc"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_defaults(gateway_config(&server.uri()));
    let result = client
        .send("Juan Perez", CaseOutcome::Accepted, "79397462")
        .await;

    assert!(result.success);
    assert_eq!(result.provider_response, Some(json!({"id": "abc"})));
    assert!(result.error_kind.is_none());
    assert!(result.status_code.is_none());
}

#[tokio::test]
async fn rendered_message_and_normalized_number_reach_the_gateway() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/as/whatsapp/send"))
        .and(body_partial_json(json!({"number": "+59179397462"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_defaults(gateway_config(&server.uri()));
    let result = client
        .send("Juan Perez", CaseOutcome::Accepted, "591 79-397462")
        .await;

    assert!(result.success);
}

#[tokio::test]
async fn gateway_rejection_is_classified_with_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/as/whatsapp/send"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "server"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_defaults(gateway_config(&server.uri()));
    let result = client
        .send("Juan Perez", CaseOutcome::Rejected, "79397462")
        .await;

    assert!(!result.success);
    assert_eq!(result.error_kind, Some(DispatchErrorKind::GatewayError));
    assert_eq!(result.status_code, Some(500));
    assert_eq!(result.details, Some(json!({"error": "server"})));
}

#[tokio::test]
async fn timeout_is_classified_as_network_error() {
    let server = MockServer::start().await;

    // Response arrives well past the 1s client timeout
    Mock::given(method("POST"))
        .and(path("/as/whatsapp/send"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(5))
                .set_body_json(json!({"ok": true})),
        )
        .mount(&server)
        .await;

    let client = client_with_defaults(gateway_config(&server.uri()));
    let result = client
        .send("Juan Perez", CaseOutcome::Accepted, "79397462")
        .await;

    assert!(!result.success);
    assert_eq!(result.error_kind, Some(DispatchErrorKind::NetworkError));
    assert_eq!(result.details, Some(json!("timeout or connectivity failure")));
}

#[tokio::test]
async fn missing_api_key_fails_without_calling_the_gateway() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut config = gateway_config(&server.uri());
    config.api_key = None;

    let client = client_with_defaults(config);
    let result = client
        .send("Juan Perez", CaseOutcome::Accepted, "79397462")
        .await;

    assert!(!result.success);
    assert_eq!(
        result.error_kind,
        Some(DispatchErrorKind::ConfigurationError)
    );
}

#[tokio::test]
async fn empty_phone_is_a_validation_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_with_defaults(gateway_config(&server.uri()));
    let result = client.send("Juan Perez", CaseOutcome::Accepted, "").await;

    assert!(!result.success);
    assert_eq!(result.error_kind, Some(DispatchErrorKind::ValidationError));
}

#[tokio::test]
async fn test_mode_overrides_the_destination_number() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/as/whatsapp/send"))
        .and(body_partial_json(json!({"number": "+59170000099"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = gateway_config(&server.uri());
    config.test_mode = true;
    config.test_number = "+59170000099".to_string();

    let client = client_with_defaults(config);
    let result = client
        .send("Juan Perez", CaseOutcome::Accepted, "71234567")
        .await;

    assert!(result.success);
}

#[tokio::test]
async fn from_number_is_included_only_when_configured() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/as/whatsapp/send"))
        .and(body_partial_json(json!({"from": "+59170000001"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = gateway_config(&server.uri());
    config.from_number = Some("+59170000001".to_string());

    let client = client_with_defaults(config);
    let result = client
        .send("Juan Perez", CaseOutcome::Accepted, "79397462")
        .await;

    assert!(result.success);
}

#[tokio::test]
async fn non_json_gateway_body_is_carried_as_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/as/whatsapp/send"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = client_with_defaults(gateway_config(&server.uri()));
    let result = client
        .send("Juan Perez", CaseOutcome::Accepted, "79397462")
        .await;

    assert_eq!(result.error_kind, Some(DispatchErrorKind::GatewayError));
    assert_eq!(result.status_code, Some(502));
    assert_eq!(result.details, Some(json!("Bad Gateway")));
}
