//! Error types for the HTTP service

use crate::responses::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::warn;

/// Webhook handler errors with HTTP status code mapping
///
/// Messages returned to the gateway are fixed strings; the decode failure
/// itself is only logged server-side.
#[derive(Debug, thiserror::Error)]
pub enum WebhookHandlerError {
    /// Body is not a notification this service understands
    ///
    /// Maps to: `400 Bad Request`
    ///
    /// Covers malformed JSON, missing required fields, and vocabulary fields
    /// carrying tags outside the known variant set.
    #[error("Invalid webhook payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

impl IntoResponse for WebhookHandlerError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::InvalidPayload(ref e) => {
                warn!(error = %e, "Rejecting undecodable webhook payload");
                (StatusCode::BAD_REQUEST, "Invalid webhook payload")
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

/// Service-level errors
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Failed to bind to address {address}: {message}")]
    BindFailed { address: String, message: String },

    #[error("Server failed: {message}")]
    ServerFailed { message: String },

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {message}")]
    Invalid { message: String },
}
