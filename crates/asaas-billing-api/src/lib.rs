//! # Asaas Billing API
//!
//! HTTP surface for receiving Asaas payment gateway webhooks.
//!
//! The webhook route sits behind [`verify_access_token`], which checks the
//! `asaas-access-token` header against the configured shared secret before
//! the notification handler ever sees the request. Anomalies are reported
//! through an [`AuditSink`].

pub mod audit;
pub mod config;
pub mod errors;
pub mod guard;
pub mod responses;

pub use audit::{
    AuditContext, AuditEventKind, AuditRecord, AuditSink, MemoryAuditSink, TracingAuditSink,
};
pub use config::{LoggingConfig, ServerConfig, ServiceConfig, WebhookConfig};
pub use errors::{ConfigError, ServiceError, WebhookHandlerError};
pub use guard::{verify_access_token, GuardRejection, WebhookGuard, ACCESS_TOKEN_HEADER};
pub use responses::{ErrorResponse, HealthResponse, WebhookAck};

use asaas_billing_core::WebhookNotification;
use axum::{
    extract::DefaultBodyLimit,
    middleware,
    response::Json,
    routing::{get, post},
    Router,
};
use bytes::Bytes;
use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
    time::Duration,
};
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{error, info, instrument};

// ============================================================================
// Application State
// ============================================================================

/// Shared state handed to every route.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
    pub guard: WebhookGuard,
}

impl AppState {
    /// Build state from configuration, reporting guard anomalies to `audit`.
    pub fn new(config: ServiceConfig, audit: Arc<dyn AuditSink>) -> Self {
        let guard = WebhookGuard::new(&config.webhook, config.environment, audit);
        Self {
            config: Arc::new(config),
            guard,
        }
    }
}

// ============================================================================
// HTTP Server
// ============================================================================

/// Create HTTP router with all endpoints
pub fn create_router(state: AppState) -> Router {
    let webhook_routes = Router::new()
        .route(&state.config.webhook.endpoint_path, post(handle_webhook))
        .route_layer(middleware::from_fn_with_state(
            state.guard.clone(),
            verify_access_token,
        ));

    let health_routes = Router::new().route("/health", get(handle_health_check));

    let timeout = Duration::from_secs(state.config.server.timeout_seconds);

    Router::new()
        .merge(webhook_routes)
        .merge(health_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(timeout))
                .layer(DefaultBodyLimit::max(state.config.server.max_body_size))
                .into_inner(),
        )
        .with_state(state)
}

/// Start HTTP server
///
/// Serves until SIGINT or SIGTERM, letting in-flight requests finish.
pub async fn start_server(config: ServiceConfig) -> Result<(), ServiceError> {
    config.validate()?;

    let host: IpAddr = config.server.host.parse().map_err(|_| {
        ServiceError::Configuration(ConfigError::Invalid {
            message: format!("server.host '{}' is not an IP address", config.server.host),
        })
    })?;
    let addr = SocketAddr::new(host, config.server.port);

    let state = AppState::new(config, Arc::new(TracingAuditSink));
    info!(
        environment = %state.config.environment,
        endpoint = %state.config.webhook.endpoint_path,
        verification_enabled = state.guard.verification_enabled(),
        "Webhook route configured"
    );
    let app = create_router(state);

    let listener =
        tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServiceError::BindFailed {
                address: addr.to_string(),
                message: e.to_string(),
            })?;

    info!("Starting HTTP server on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| ServiceError::ServerFailed {
        message: e.to_string(),
    })?;

    info!("HTTP server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C signal handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown"),
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Accept a gateway notification that already passed the access guard.
///
/// Decodes the body so that vocabulary fields with unknown tags are refused
/// here rather than deeper in the application.
#[instrument(skip(body), fields(body_len = body.len()))]
pub async fn handle_webhook(body: Bytes) -> Result<Json<WebhookAck>, WebhookHandlerError> {
    let notification = WebhookNotification::from_slice(&body)?;

    info!(
        event = %notification.event,
        event_id = notification.id.as_deref().unwrap_or("-"),
        "Asaas webhook accepted"
    );

    Ok(Json(WebhookAck {
        received: true,
        event: notification.event,
    }))
}

async fn handle_health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
