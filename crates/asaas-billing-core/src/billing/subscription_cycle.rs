//! Billing period of a subscription.

use super::VocabularyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// How often a subscription generates a new charge.
///
/// Each cycle maps to a fixed day count used for scheduling estimates. The
/// counts are nominal (a month is always 30 days); the gateway computes the
/// actual due dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum SubscriptionCycle {
    Weekly,
    Biweekly,
    Monthly,
    Quarterly,
    Semiannually,
    Yearly,
}

impl SubscriptionCycle {
    const WEEKLY: &'static str = "WEEKLY";
    const BIWEEKLY: &'static str = "BIWEEKLY";
    const MONTHLY: &'static str = "MONTHLY";
    const QUARTERLY: &'static str = "QUARTERLY";
    const SEMIANNUALLY: &'static str = "SEMIANNUALLY";
    const YEARLY: &'static str = "YEARLY";

    /// Every variant, shortest cycle first.
    pub const fn all() -> [Self; 6] {
        [
            Self::Weekly,
            Self::Biweekly,
            Self::Monthly,
            Self::Quarterly,
            Self::Semiannually,
            Self::Yearly,
        ]
    }

    /// Wire tag used by the Asaas API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => Self::WEEKLY,
            Self::Biweekly => Self::BIWEEKLY,
            Self::Monthly => Self::MONTHLY,
            Self::Quarterly => Self::QUARTERLY,
            Self::Semiannually => Self::SEMIANNUALLY,
            Self::Yearly => Self::YEARLY,
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Weekly => "Semanal",
            Self::Biweekly => "Quinzenal",
            Self::Monthly => "Mensal",
            Self::Quarterly => "Trimestral",
            Self::Semiannually => "Semestral",
            Self::Yearly => "Anual",
        }
    }

    /// Nominal length of the cycle in days.
    pub fn days(&self) -> u32 {
        match self {
            Self::Weekly => 7,
            Self::Biweekly => 14,
            Self::Monthly => 30,
            Self::Quarterly => 90,
            Self::Semiannually => 180,
            Self::Yearly => 365,
        }
    }

    /// Nominal length of the cycle as a [`Duration`].
    pub fn period(&self) -> Duration {
        Duration::from_secs(u64::from(self.days()) * SECONDS_PER_DAY)
    }
}

impl fmt::Display for SubscriptionCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubscriptionCycle {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::WEEKLY => Ok(Self::Weekly),
            Self::BIWEEKLY => Ok(Self::Biweekly),
            Self::MONTHLY => Ok(Self::Monthly),
            Self::QUARTERLY => Ok(Self::Quarterly),
            Self::SEMIANNUALLY => Ok(Self::Semiannually),
            Self::YEARLY => Ok(Self::Yearly),
            other => Err(VocabularyError::unknown("subscription cycle", other)),
        }
    }
}

impl TryFrom<String> for SubscriptionCycle {
    type Error = VocabularyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SubscriptionCycle> for &'static str {
    fn from(value: SubscriptionCycle) -> Self {
        value.as_str()
    }
}
