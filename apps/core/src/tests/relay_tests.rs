//! Relay Tests
//!
//! The HTTP contact relay against a wiremock server.

use crate::actors::traits::ContactRelay;
use crate::contact::RelayClient;
use crate::error::AppError;
use crate::models::ContactSubmission;
use serde_json::json;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn submission() -> ContactSubmission {
    ContactSubmission::new("Ada Lovelace", "ada@example.com", "Need a landing page")
}

fn client(server: &MockServer, access_key: Option<&str>) -> RelayClient {
    let endpoint = Url::parse(&format!("{}/submit", server.uri())).unwrap();
    RelayClient::new(endpoint, access_key.map(str::to_string))
}

#[tokio::test]
async fn test_successful_submission() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/submit"))
        .and(body_partial_json(json!({
            "access_key": "key-123",
            "subject": "Inquiry from Ada Lovelace via Chatbot",
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "message": "Need a landing page",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Email sent"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let receipt = client(&server, Some("key-123")).submit(&submission()).await.unwrap();
    assert!(receipt.success);
    assert_eq!(receipt.message.as_deref(), Some("Email sent"));
}

#[tokio::test]
async fn test_success_false_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Invalid access key"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server, None).submit(&submission()).await;
    match result {
        Err(AppError::Relay(reason)) => assert_eq!(reason, "Invalid access key"),
        other => panic!("expected relay error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server, None).submit(&submission()).await;
    assert!(matches!(result, Err(AppError::Relay(_))));
    // MockServer verifies `expect(1)` on drop
}

#[tokio::test]
async fn test_unreachable_relay_is_an_error() {
    let server = MockServer::start().await;
    let relay = client(&server, None);
    drop(server);

    let result = relay.submit(&submission()).await;
    assert!(matches!(result, Err(AppError::Relay(_))));
}

#[tokio::test]
async fn test_slow_relay_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": true }))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let relay = client(&server, None).with_timeout(Duration::from_millis(200));
    let result = relay.submit(&submission()).await;
    assert!(matches!(result, Err(AppError::Timeout(_))));
}
