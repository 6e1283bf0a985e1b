use super::VocabularyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of a subscription as reported by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum SubscriptionStatus {
    Active,
    Inactive,
    Expired,
}

impl SubscriptionStatus {
    const ACTIVE: &'static str = "ACTIVE";
    const INACTIVE: &'static str = "INACTIVE";
    const EXPIRED: &'static str = "EXPIRED";

    pub const fn all() -> [Self; 3] {
        [Self::Active, Self::Inactive, Self::Expired]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => Self::ACTIVE,
            Self::Inactive => Self::INACTIVE,
            Self::Expired => Self::EXPIRED,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Ativa",
            Self::Inactive => "Inativa",
            Self::Expired => "Expirada",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubscriptionStatus {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::ACTIVE => Ok(Self::Active),
            Self::INACTIVE => Ok(Self::Inactive),
            Self::EXPIRED => Ok(Self::Expired),
            other => Err(VocabularyError::unknown("subscription status", other)),
        }
    }
}

impl TryFrom<String> for SubscriptionStatus {
    type Error = VocabularyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SubscriptionStatus> for &'static str {
    fn from(value: SubscriptionStatus) -> Self {
        value.as_str()
    }
}
