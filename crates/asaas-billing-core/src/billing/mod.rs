//! Closed enumerations shared with the Asaas API.
//!
//! Every type here serializes to and from the exact uppercase tag the gateway
//! uses (`CREDIT_CARD`, `SEMIANNUALLY`, ...). Decoding is case-sensitive and
//! fails with [`VocabularyError::UnknownVariant`] for anything outside the
//! variant set; there is no fallback variant.

mod billing_method;
mod charge_type;
mod checkout_status;
mod subscription_cycle;
mod subscription_status;

pub use billing_method::BillingMethod;
pub use charge_type::ChargeType;
pub use checkout_status::CheckoutStatus;
pub use subscription_cycle::SubscriptionCycle;
pub use subscription_status::SubscriptionStatus;

/// Failure to decode a wire tag into one of the billing enumerations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VocabularyError {
    #[error("Unknown {vocabulary} '{value}'")]
    UnknownVariant {
        vocabulary: &'static str,
        value: String,
    },
}

impl VocabularyError {
    pub(crate) fn unknown(vocabulary: &'static str, value: &str) -> Self {
        Self::UnknownVariant {
            vocabulary,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
