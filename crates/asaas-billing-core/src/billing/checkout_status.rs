//! Status of a hosted checkout session.

use super::VocabularyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of a checkout as reported by the gateway.
///
/// The gateway owns the lifecycle; this type only classifies a value that
/// arrived from outside. [`CheckoutStatus::Active`] is the sole non-terminal
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum CheckoutStatus {
    Active,
    Paid,
    Canceled,
    Expired,
}

impl CheckoutStatus {
    const ACTIVE: &'static str = "ACTIVE";
    const PAID: &'static str = "PAID";
    const CANCELED: &'static str = "CANCELED";
    const EXPIRED: &'static str = "EXPIRED";

    /// Every variant in declaration order.
    pub const fn all() -> [Self; 4] {
        [Self::Active, Self::Paid, Self::Canceled, Self::Expired]
    }

    /// Wire tag used by the Asaas API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => Self::ACTIVE,
            Self::Paid => Self::PAID,
            Self::Canceled => Self::CANCELED,
            Self::Expired => Self::EXPIRED,
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Ativo",
            Self::Paid => "Pago",
            Self::Canceled => "Cancelado",
            Self::Expired => "Expirado",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    pub fn is_paid(&self) -> bool {
        matches!(self, Self::Paid)
    }

    pub fn is_canceled(&self) -> bool {
        matches!(self, Self::Canceled)
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, Self::Expired)
    }

    /// Returns `true` for terminal states: paid, canceled or expired.
    pub fn is_finished(&self) -> bool {
        match self {
            Self::Active => false,
            Self::Paid | Self::Canceled | Self::Expired => true,
        }
    }
}

impl fmt::Display for CheckoutStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckoutStatus {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::ACTIVE => Ok(Self::Active),
            Self::PAID => Ok(Self::Paid),
            Self::CANCELED => Ok(Self::Canceled),
            Self::EXPIRED => Ok(Self::Expired),
            other => Err(VocabularyError::unknown("checkout status", other)),
        }
    }
}

impl TryFrom<String> for CheckoutStatus {
    type Error = VocabularyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CheckoutStatus> for &'static str {
    fn from(value: CheckoutStatus) -> Self {
        value.as_str()
    }
}
