//! Configuration types for the HTTP service

use crate::errors::ConfigError;
use asaas_billing_core::Environment;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;

/// Service configuration
///
/// Every section carries serde defaults, so an empty source produces a valid
/// development configuration with webhook verification disabled.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Run mode of the host application
    pub environment: Environment,

    /// HTTP server settings
    pub server: ServerConfig,

    /// Webhook receiver settings
    pub webhook: WebhookConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl ServiceConfig {
    /// Check the configuration for values the server cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.parse::<IpAddr>().is_err() {
            return Err(ConfigError::Invalid {
                message: format!("server.host '{}' is not an IP address", self.server.host),
            });
        }

        if self.server.port == 0 {
            return Err(ConfigError::Invalid {
                message: "server.port must be greater than zero".to_string(),
            });
        }

        if self.server.timeout_seconds == 0 {
            return Err(ConfigError::Invalid {
                message: "server.timeout_seconds must be greater than zero".to_string(),
            });
        }

        if self.server.max_body_size == 0 {
            return Err(ConfigError::Invalid {
                message: "server.max_body_size must be greater than zero".to_string(),
            });
        }

        if !self.webhook.endpoint_path.starts_with('/') {
            return Err(ConfigError::Invalid {
                message: format!(
                    "webhook.endpoint_path '{}' must start with '/'",
                    self.webhook.endpoint_path
                ),
            });
        }

        if self.logging.level.parse::<tracing::Level>().is_err() {
            return Err(ConfigError::Invalid {
                message: format!(
                    "logging.level '{}' must be one of error, warn, info, debug, trace",
                    self.logging.level
                ),
            });
        }

        Ok(())
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Request timeout in seconds
    pub timeout_seconds: u64,

    /// Maximum request size in bytes
    pub max_body_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            timeout_seconds: 30,
            max_body_size: 1024 * 1024, // 1MB
        }
    }
}

/// Webhook receiver configuration
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookConfig {
    /// Route the gateway posts notifications to
    pub endpoint_path: String,

    /// Shared secret expected in the `asaas-access-token` header
    pub webhook_token: Option<String>,
}

impl WebhookConfig {
    /// The configured token, treating an empty string as unset.
    pub fn configured_token(&self) -> Option<&str> {
        self.webhook_token.as_deref().filter(|t| !t.is_empty())
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            endpoint_path: "/asaas/webhook".to_string(),
            webhook_token: None,
        }
    }
}

// Security: Don't expose the shared secret in debug output
impl fmt::Debug for WebhookConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookConfig")
            .field("endpoint_path", &self.endpoint_path)
            .field(
                "webhook_token",
                &self.configured_token().map(|_| "<REDACTED>"),
            )
            .finish()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Logging level
    pub level: String,

    /// Enable JSON structured logging
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
