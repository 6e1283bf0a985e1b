//! Payment method attached to a charge or subscription.

use super::VocabularyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the payer settles a charge.
///
/// [`BillingMethod::Undefined`] does not mean "unknown": it tells the gateway
/// to let the payer pick boleto, card or Pix on the checkout page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum BillingMethod {
    Boleto,
    CreditCard,
    Pix,
    Undefined,
}

impl BillingMethod {
    const BOLETO: &'static str = "BOLETO";
    const CREDIT_CARD: &'static str = "CREDIT_CARD";
    const PIX: &'static str = "PIX";
    const UNDEFINED: &'static str = "UNDEFINED";

    /// Every variant in declaration order.
    pub const fn all() -> [Self; 4] {
        [Self::Boleto, Self::CreditCard, Self::Pix, Self::Undefined]
    }

    /// Wire tag used by the Asaas API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boleto => Self::BOLETO,
            Self::CreditCard => Self::CREDIT_CARD,
            Self::Pix => Self::PIX,
            Self::Undefined => Self::UNDEFINED,
        }
    }

    /// Display label shown to payers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Boleto => "Boleto Bancário",
            Self::CreditCard => "Cartão de Crédito",
            Self::Pix => "Pix",
            Self::Undefined => "Perguntar ao Cliente",
        }
    }

    /// Returns `true` when the payer chooses the method at checkout.
    pub fn lets_payer_choose(&self) -> bool {
        matches!(self, Self::Undefined)
    }
}

impl fmt::Display for BillingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BillingMethod {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::BOLETO => Ok(Self::Boleto),
            Self::CREDIT_CARD => Ok(Self::CreditCard),
            Self::PIX => Ok(Self::Pix),
            Self::UNDEFINED => Ok(Self::Undefined),
            other => Err(VocabularyError::unknown("billing method", other)),
        }
    }
}

impl TryFrom<String> for BillingMethod {
    type Error = VocabularyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BillingMethod> for &'static str {
    fn from(value: BillingMethod) -> Self {
        value.as_str()
    }
}
