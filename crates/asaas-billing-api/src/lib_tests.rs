//! Tests for the router and handlers.

use super::*;
use asaas_billing_core::Environment;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use tower::ServiceExt; // For `oneshot`

fn state(token: Option<&str>, environment: Environment) -> (AppState, Arc<MemoryAuditSink>) {
    let config = ServiceConfig {
        environment,
        webhook: WebhookConfig {
            webhook_token: token.map(str::to_string),
            ..WebhookConfig::default()
        },
        ..ServiceConfig::default()
    };
    let sink = Arc::new(MemoryAuditSink::new());
    (AppState::new(config, sink.clone()), sink)
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_is_not_guarded() {
    // Arrange
    let (state, sink) = state(Some("secret"), Environment::Production);
    let app = create_router(state);

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    // Act
    let response = app.oneshot(request).await.unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
    assert!(sink.is_empty());
}

#[tokio::test]
async fn test_webhook_with_valid_token_is_acknowledged() {
    // Arrange
    let (state, sink) = state(Some("secret"), Environment::Production);
    let app = create_router(state);

    let request = Request::builder()
        .method("POST")
        .uri("/asaas/webhook")
        .header(ACCESS_TOKEN_HEADER, "secret")
        .header("content-type", "application/json")
        .body(Body::from(
            r#"{"event":"PAYMENT_CONFIRMED","payment":{"id":"pay_1","billingType":"CREDIT_CARD"}}"#,
        ))
        .unwrap();

    // Act
    let response = app.oneshot(request).await.unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        serde_json::json!({ "received": true, "event": "PAYMENT_CONFIRMED" })
    );
    assert!(sink.is_empty());
}

#[tokio::test]
async fn test_guard_runs_before_payload_decoding() {
    // Arrange
    let (state, _sink) = state(Some("secret"), Environment::Production);
    let app = create_router(state);

    let request = Request::builder()
        .method("POST")
        .uri("/asaas/webhook")
        .body(Body::from("not json at all"))
        .unwrap();

    // Act
    let response = app.oneshot(request).await.unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        json_body(response).await,
        serde_json::json!({ "error": "Missing access token" })
    );
}

#[tokio::test]
async fn test_unknown_vocabulary_tag_is_bad_request() {
    // Arrange
    let (state, _sink) = state(None, Environment::Development);
    let app = create_router(state);

    let request = Request::builder()
        .method("POST")
        .uri("/asaas/webhook")
        .body(Body::from(
            r#"{"event":"CHECKOUT_PAID","checkout":{"id":"chk_1","status":"BOGUS"}}"#,
        ))
        .unwrap();

    // Act
    let response = app.oneshot(request).await.unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        serde_json::json!({ "error": "Invalid webhook payload" })
    );
}

#[tokio::test]
async fn test_custom_endpoint_path_is_honoured() {
    // Arrange
    let config = ServiceConfig {
        webhook: WebhookConfig {
            endpoint_path: "/hooks/asaas".to_string(),
            webhook_token: Some("secret".to_string()),
        },
        ..ServiceConfig::default()
    };
    let app = create_router(AppState::new(config, Arc::new(MemoryAuditSink::new())));

    let request = Request::builder()
        .method("POST")
        .uri("/hooks/asaas")
        .header(ACCESS_TOKEN_HEADER, "wrong")
        .body(Body::from("{}"))
        .unwrap();

    // Act
    let response = app.oneshot(request).await.unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    // Arrange
    let mut config = ServiceConfig::default();
    config.server.max_body_size = 16;
    let app = create_router(AppState::new(config, Arc::new(MemoryAuditSink::new())));

    let request = Request::builder()
        .method("POST")
        .uri("/asaas/webhook")
        .body(Body::from(format!(
            r#"{{"event":"{}"}}"#,
            "PAYMENT_CREATED".repeat(4)
        )))
        .unwrap();

    // Act
    let response = app.oneshot(request).await.unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_handle_webhook_decodes_event_name() {
    let Json(ack) = handle_webhook(Bytes::from_static(br#"{"event":"SUBSCRIPTION_CREATED"}"#))
        .await
        .unwrap();

    assert!(ack.received);
    assert_eq!(ack.event, "SUBSCRIPTION_CREATED");
}

#[tokio::test]
async fn test_start_server_rejects_invalid_config() {
    let mut config = ServiceConfig::default();
    config.server.port = 0;

    let result = start_server(config).await;

    assert!(matches!(result, Err(ServiceError::Configuration(_))));
}
