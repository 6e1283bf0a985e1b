//! # Asaas Billing Core
//!
//! Domain vocabulary for integrating an application's billing with the Asaas
//! payment gateway.
//!
//! This crate contains the closed enumerations the gateway uses on the wire
//! (billing methods, charge types, checkout and subscription states,
//! subscription cycles), the run-mode type shared by the HTTP layer, and the
//! typed model of inbound webhook notifications.
//!
//! ## Usage
//!
//! ```rust
//! use asaas_billing_core::{CheckoutStatus, SubscriptionCycle};
//!
//! let status: CheckoutStatus = "PAID".parse().unwrap();
//! assert!(status.is_finished());
//!
//! assert_eq!(SubscriptionCycle::Monthly.days(), 30);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod billing;
pub mod webhook;

pub use billing::{
    BillingMethod, ChargeType, CheckoutStatus, SubscriptionCycle, SubscriptionStatus,
    VocabularyError,
};
pub use webhook::{
    CheckoutNotification, PaymentNotification, SubscriptionNotification, WebhookNotification,
};

// ============================================================================
// Configuration Types
// ============================================================================

/// Run mode of the host application.
///
/// Only [`Environment::Production`] changes behaviour: the webhook guard warns
/// when it runs without a configured access token in production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Environment {
    Local,
    #[default]
    Development,
    Testing,
    Staging,
    Production,
}

impl Environment {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Development => "development",
            Self::Testing => "testing",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }

    /// Returns `true` only for [`Environment::Production`].
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "development" | "dev" => Ok(Self::Development),
            "testing" | "test" => Ok(Self::Testing),
            "staging" | "stage" => Ok(Self::Staging),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(ParseError::InvalidFormat {
                expected: "local, development, testing, staging, or production".to_string(),
                actual: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Environment> for String {
    fn from(value: Environment) -> Self {
        value.as_str().to_string()
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Error type for string parsing failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid format: expected {expected}, got '{actual}'")]
    InvalidFormat { expected: String, actual: String },
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
