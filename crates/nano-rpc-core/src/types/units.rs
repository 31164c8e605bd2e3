use serde::{Deserialize, Serialize};

/// An amount handed to the unit-conversion actions.
///
/// Forwarded as given: a number stays a JSON number and a decimal string
/// stays a string. No scaling or range check happens client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(u64),
    Decimal(String),
}

impl From<u64> for Amount {
    fn from(n: u64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Amount {
    fn from(s: &str) -> Self {
        Self::Decimal(s.to_owned())
    }
}

impl From<String> for Amount {
    fn from(s: String) -> Self {
        Self::Decimal(s)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Decimal(s) => f.write_str(s),
        }
    }
}

/// Result of `mrai_to_raw`, `krai_from_raw` and the other conversions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertedAmount {
    pub amount: String,
}
