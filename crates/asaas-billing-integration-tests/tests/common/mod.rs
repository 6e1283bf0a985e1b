//! Common test utilities for asaas-billing-api integration tests
//!
//! This module provides:
//! - Router construction with an in-memory audit sink
//! - Request builders for gateway callbacks
//! - Response body helpers

use asaas_billing_api::{
    create_router, AppState, MemoryAuditSink, ServiceConfig, WebhookConfig, ACCESS_TOKEN_HEADER,
};
use asaas_billing_core::Environment;
use axum::{
    body::{to_bytes, Body},
    extract::ConnectInfo,
    http::Request,
    response::Response,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;

pub const WEBHOOK_PATH: &str = "/asaas/webhook";
pub const SHARED_SECRET: &str = "asaas-shared-secret-0b7e";
#[allow(dead_code)]
pub const CALLER_ADDR: ([u8; 4], u16) = ([192, 0, 2, 44], 51234);

/// Router plus the sink the guard reports to.
pub struct TestApp {
    pub router: Router,
    pub audit: Arc<MemoryAuditSink>,
}

pub fn create_test_app(token: Option<&str>, environment: Environment) -> TestApp {
    let config = ServiceConfig {
        environment,
        webhook: WebhookConfig {
            webhook_token: token.map(str::to_string),
            ..WebhookConfig::default()
        },
        ..ServiceConfig::default()
    };
    let audit = Arc::new(MemoryAuditSink::new());
    let router = create_router(AppState::new(config, audit.clone()));
    TestApp { router, audit }
}

/// A gateway callback as it arrives over the socket.
pub fn webhook_request(token: Option<&str>, body: impl Into<Body>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(WEBHOOK_PATH)
        .header("content-type", "application/json")
        .header("user-agent", "Asaas_Prod/3.0");
    if let Some(token) = token {
        builder = builder.header(ACCESS_TOKEN_HEADER, token);
    }

    let mut request = builder.body(body.into()).unwrap();
    request
        .extensions_mut()
        .insert(ConnectInfo(SocketAddr::from(CALLER_ADDR)));
    request
}

#[allow(dead_code)]
pub fn payment_received_body() -> &'static str {
    r#"{
        "id": "evt_6f1c2a",
        "event": "PAYMENT_RECEIVED",
        "dateCreated": "2024-09-02 10:15:00",
        "payment": {
            "id": "pay_8a7b6c",
            "customer": "cus_000001",
            "billingType": "BOLETO",
            "value": 250.0,
            "status": "RECEIVED"
        }
    }"#
}

pub async fn json_body(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
