//! Access-token guard for the Asaas webhook route.
//!
//! The gateway authenticates its callbacks with a pre-shared secret sent in
//! the `asaas-access-token` header. [`WebhookGuard`] checks that header
//! against the configured token and [`verify_access_token`] plugs the check
//! into an axum middleware chain in front of the webhook handler.
//!
//! # Decision table
//!
//! | Token configured | Header | Outcome |
//! |------------------|--------|---------|
//! | no | any | forward (warning per request in production) |
//! | yes | absent or empty | `403 Missing access token` |
//! | yes | different | `403 Invalid access token` |
//! | yes | equal | forward |
//!
//! Running without a token is a permissive default meant for local and trial
//! setups. It is kept for compatibility with existing deployments.
//!
//! # Security
//!
//! - Both the configured and the presented token are reduced to SHA-256
//!   digests and the digests are compared with [`subtle::ConstantTimeEq`], so
//!   the comparison time depends neither on the matching prefix length nor
//!   on the secret length
//! - Token values are never logged or exposed in debug output
//! - The request body is never read; `next` receives the request untouched

use crate::audit::{AuditContext, AuditEventKind, AuditRecord, AuditSink};
use crate::config::WebhookConfig;
use crate::responses::ErrorResponse;
use asaas_billing_core::Environment;
use axum::{
    extract::{ConnectInfo, Request, State},
    http::{header::USER_AGENT, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use sha2::{Digest, Sha256};
use std::fmt;
use std::net::SocketAddr;
use std::sync::Arc;
use subtle::ConstantTimeEq;
use tracing::{info, instrument};

/// Header carrying the shared secret on gateway callbacks.
pub const ACCESS_TOKEN_HEADER: &str = "asaas-access-token";

/// SHA-256 digest of a token.
#[derive(Clone, Copy)]
struct TokenDigest([u8; 32]);

impl TokenDigest {
    fn of(token: &[u8]) -> Self {
        Self(Sha256::digest(token).into())
    }

    fn matches(&self, presented: &[u8]) -> bool {
        let presented = Self::of(presented);
        self.0[..].ct_eq(&presented.0[..]).into()
    }
}

/// Why a request was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardRejection {
    MissingAccessToken,
    InvalidAccessToken,
}

impl GuardRejection {
    /// Message placed in the `error` field of the response body.
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingAccessToken => "Missing access token",
            Self::InvalidAccessToken => "Invalid access token",
        }
    }
}

impl fmt::Display for GuardRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl IntoResponse for GuardRejection {
    fn into_response(self) -> Response {
        (StatusCode::FORBIDDEN, Json(ErrorResponse::new(self.message()))).into_response()
    }
}

struct GuardInner {
    token: Option<TokenDigest>,
    environment: Environment,
    audit: Arc<dyn AuditSink>,
}

/// Validates the shared-secret header of inbound webhook requests.
///
/// Holds only immutable state; clones share it and can be used from any
/// number of concurrent requests.
///
/// # Examples
///
/// ```rust
/// use asaas_billing_api::{TracingAuditSink, WebhookConfig, WebhookGuard};
/// use asaas_billing_core::Environment;
/// use std::sync::Arc;
///
/// let config = WebhookConfig {
///     webhook_token: Some("shared-secret".to_string()),
///     ..WebhookConfig::default()
/// };
/// let guard = WebhookGuard::new(&config, Environment::Production, Arc::new(TracingAuditSink));
/// assert!(guard.verification_enabled());
/// ```
#[derive(Clone)]
pub struct WebhookGuard {
    inner: Arc<GuardInner>,
}

impl WebhookGuard {
    /// Create a guard from the webhook configuration and run mode.
    ///
    /// Only a digest of the configured token is retained.
    pub fn new(config: &WebhookConfig, environment: Environment, audit: Arc<dyn AuditSink>) -> Self {
        let token = config
            .configured_token()
            .map(|t| TokenDigest::of(t.as_bytes()));

        if token.is_none() {
            info!(
                environment = %environment,
                "Asaas webhook access-token verification is not configured"
            );
        }

        Self {
            inner: Arc::new(GuardInner {
                token,
                environment,
                audit,
            }),
        }
    }

    /// Returns `true` when a token is configured and requests are checked.
    pub fn verification_enabled(&self) -> bool {
        self.inner.token.is_some()
    }

    /// Decide whether a request with these headers may reach the handler.
    ///
    /// Emits at most one audit record per call.
    pub fn check(&self, headers: &HeaderMap, context: AuditContext) -> Result<(), GuardRejection> {
        let Some(expected) = &self.inner.token else {
            if self.inner.environment.is_production() {
                self.inner
                    .audit
                    .warn(AuditRecord::new(AuditEventKind::VerificationDisabled));
            }
            return Ok(());
        };

        let presented = match headers.get(ACCESS_TOKEN_HEADER) {
            Some(value) if !value.as_bytes().is_empty() => value.as_bytes(),
            _ => {
                self.inner.audit.warn(AuditRecord::with_context(
                    AuditEventKind::MissingAccessToken,
                    context,
                ));
                return Err(GuardRejection::MissingAccessToken);
            }
        };

        if expected.matches(presented) {
            Ok(())
        } else {
            self.inner.audit.warn(AuditRecord::with_context(
                AuditEventKind::InvalidAccessToken,
                context,
            ));
            Err(GuardRejection::InvalidAccessToken)
        }
    }
}

// Security: Don't expose the token digest in debug output
impl fmt::Debug for WebhookGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookGuard")
            .field("verification_enabled", &self.verification_enabled())
            .field("environment", &self.inner.environment)
            .finish()
    }
}

/// Collect the caller metadata recorded alongside rejections.
///
/// The IP comes from the connection (`ConnectInfo`), not from forwarding
/// headers, which the caller controls.
pub fn audit_context(request: &Request) -> AuditContext {
    AuditContext {
        ip: request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip()),
        user_agent: request
            .headers()
            .get(USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    }
}

/// Axum middleware enforcing [`WebhookGuard`] on the routes it wraps.
///
/// ```rust,no_run
/// use asaas_billing_api::{verify_access_token, WebhookGuard};
/// use axum::{middleware, routing::post, Router};
///
/// # fn example(guard: WebhookGuard) -> Router {
/// Router::new()
///     .route("/asaas/webhook", post(|| async { "ok" }))
///     .route_layer(middleware::from_fn_with_state(guard, verify_access_token))
/// # }
/// ```
#[instrument(skip_all, fields(method = %request.method(), uri = %request.uri()))]
pub async fn verify_access_token(
    State(guard): State<WebhookGuard>,
    request: Request,
    next: Next,
) -> Response {
    let decision = guard.check(request.headers(), audit_context(&request));

    match decision {
        Ok(()) => next.run(request).await,
        Err(rejection) => rejection.into_response(),
    }
}

#[cfg(test)]
#[path = "guard_tests.rs"]
mod tests;
