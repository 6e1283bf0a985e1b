//! Typed model of the notifications the gateway posts to the webhook route.
//!
//! Only the fields the billing domain reads are modelled. Unknown fields are
//! ignored, but a vocabulary field carrying an unknown tag fails the whole
//! decode: a payment with an unrecognised billing method is never silently
//! accepted under some default.

use crate::billing::{
    BillingMethod, ChargeType, CheckoutStatus, SubscriptionCycle, SubscriptionStatus,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single webhook notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookNotification {
    /// Gateway-assigned event identifier (`evt_...`), absent on older payloads.
    #[serde(default)]
    pub id: Option<String>,

    /// Event name, e.g. `PAYMENT_RECEIVED` or `SUBSCRIPTION_UPDATED`.
    pub event: String,

    #[serde(default, with = "gateway_datetime")]
    pub date_created: Option<NaiveDateTime>,

    #[serde(default)]
    pub payment: Option<PaymentNotification>,

    #[serde(default)]
    pub subscription: Option<SubscriptionNotification>,

    #[serde(default)]
    pub checkout: Option<CheckoutNotification>,
}

impl WebhookNotification {
    /// Decode a notification from a raw request body.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentNotification {
    pub id: String,

    #[serde(default)]
    pub customer: Option<String>,

    pub billing_type: BillingMethod,

    #[serde(default)]
    pub value: Option<f64>,

    /// Payment status. Kept as the raw tag because the gateway's payment
    /// lifecycle is wider than anything this crate classifies.
    #[serde(default)]
    pub status: Option<String>,

    /// Subscription that generated this payment.
    #[serde(default)]
    pub subscription: Option<String>,

    /// Installment plan this payment belongs to.
    #[serde(default)]
    pub installment: Option<String>,
}

impl PaymentNotification {
    /// Classify the payment by how it was generated.
    pub fn charge_type(&self) -> ChargeType {
        if self.installment.is_some() {
            ChargeType::Installment
        } else if self.subscription.is_some() {
            ChargeType::Recurrent
        } else {
            ChargeType::Detached
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionNotification {
    pub id: String,

    #[serde(default)]
    pub customer: Option<String>,

    #[serde(default)]
    pub billing_type: Option<BillingMethod>,

    pub cycle: SubscriptionCycle,

    pub status: SubscriptionStatus,

    #[serde(default)]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutNotification {
    pub id: String,
    pub status: CheckoutStatus,
}

/// `dateCreated` arrives as `YYYY-MM-DD HH:MM:SS` without a zone.
mod gateway_datetime {
    use chrono::NaiveDateTime;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&dt.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| NaiveDateTime::parse_from_str(&s, FORMAT).map_err(D::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
#[path = "webhook_tests.rs"]
mod tests;
