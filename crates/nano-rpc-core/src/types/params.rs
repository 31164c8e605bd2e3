use serde::{Deserialize, Serialize};

use super::is_false;

/// Optional flags for `account_history`.
///
/// Unset flags are left out of the request; the node treats them as off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountHistoryOptions {
    /// Return every block field instead of the condensed summary.
    #[serde(default, skip_serializing_if = "is_false")]
    pub raw: bool,
    /// Start from this block hash instead of the frontier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<String>,
    /// Skip this many blocks before returning results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    /// Walk from the open block towards the frontier.
    #[serde(default, skip_serializing_if = "is_false")]
    pub reverse: bool,
    /// Only return blocks to or from these accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_filter: Option<Vec<String>>,
}

/// Optional extra fields for `account_info`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfoOptions {
    #[serde(default, skip_serializing_if = "is_false")]
    pub representative: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub weight: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub pending: bool,
}

/// Optional flags for `ledger`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerOptions {
    #[serde(default, skip_serializing_if = "is_false")]
    pub representative: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub weight: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub pending: bool,
    /// Sort accounts by descending balance.
    #[serde(default, skip_serializing_if = "is_false")]
    pub sorting: bool,
}

/// Block type understood by `block_create`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Open,
    Send,
    Receive,
    Change,
    State,
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Send => write!(f, "send"),
            Self::Receive => write!(f, "receive"),
            Self::Change => write!(f, "change"),
            Self::State => write!(f, "state"),
        }
    }
}

impl std::str::FromStr for BlockKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "send" => Ok(Self::Send),
            "receive" => Ok(Self::Receive),
            "change" => Ok(Self::Change),
            "state" => Ok(Self::State),
            other => Err(format!(
                "unknown block type `{other}`; expected open, send, receive, change or state"
            )),
        }
    }
}

/// Request body for `block_create` (without the `action` tag).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockCreateRequest {
    #[serde(rename = "type")]
    pub kind: BlockKind,
    /// Private key used to sign the block.
    pub key: String,
    pub account: String,
    pub representative: String,
    /// Hash of the send block being received.
    pub source: String,
}
