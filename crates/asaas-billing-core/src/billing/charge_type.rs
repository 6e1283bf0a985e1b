use super::VocabularyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a charge stands alone, belongs to an installment plan, or is
/// generated by a subscription.
///
/// Exactly one of [`is_one_time`](Self::is_one_time),
/// [`is_installment`](Self::is_installment) and
/// [`is_recurrent`](Self::is_recurrent) holds for any value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ChargeType {
    Detached,
    Installment,
    Recurrent,
}

impl ChargeType {
    const DETACHED: &'static str = "DETACHED";
    const INSTALLMENT: &'static str = "INSTALLMENT";
    const RECURRENT: &'static str = "RECURRENT";

    pub const fn all() -> [Self; 3] {
        [Self::Detached, Self::Installment, Self::Recurrent]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Detached => Self::DETACHED,
            Self::Installment => Self::INSTALLMENT,
            Self::Recurrent => Self::RECURRENT,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Detached => "Avulsa",
            Self::Installment => "Parcelada",
            Self::Recurrent => "Recorrente",
        }
    }

    pub fn is_one_time(&self) -> bool {
        matches!(self, Self::Detached)
    }

    pub fn is_installment(&self) -> bool {
        matches!(self, Self::Installment)
    }

    pub fn is_recurrent(&self) -> bool {
        matches!(self, Self::Recurrent)
    }
}

impl fmt::Display for ChargeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChargeType {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::DETACHED => Ok(Self::Detached),
            Self::INSTALLMENT => Ok(Self::Installment),
            Self::RECURRENT => Ok(Self::Recurrent),
            other => Err(VocabularyError::unknown("charge type", other)),
        }
    }
}

impl TryFrom<String> for ChargeType {
    type Error = VocabularyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ChargeType> for &'static str {
    fn from(value: ChargeType) -> Self {
        value.as_str()
    }
}
