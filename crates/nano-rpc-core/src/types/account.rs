use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::empty_string_as_default;

// ==============================================================================
// Balances & Weights
// ==============================================================================

/// Balance pair from `account_balance`, in raw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountBalance {
    pub balance: String,
    pub pending: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receivable: Option<String>,
}

/// Per-account balances from `accounts_balances`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountsBalances {
    #[serde(deserialize_with = "empty_string_as_default")]
    pub balances: BTreeMap<String, AccountBalance>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountWeight {
    pub weight: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountBlockCount {
    pub block_count: String,
}

// ==============================================================================
// Keys & Identity
// ==============================================================================

/// An account address; returned by `account_get` and `block_account`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountId {
    pub account: String,
}

/// Public key from `account_key`, hex encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountKey {
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRepresentative {
    pub representative: String,
}

// ==============================================================================
// Account Info
// ==============================================================================

/// Account summary from `account_info`.
///
/// `representative`, `weight` and `pending` are only present when requested
/// through [`AccountInfoOptions`](super::AccountInfoOptions).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub frontier: String,
    pub open_block: String,
    pub representative_block: String,
    pub balance: String,
    pub modified_timestamp: String,
    pub block_count: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub representative: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ==============================================================================
// History
// ==============================================================================

/// One block in an `account_history` or `history` listing.
///
/// The condensed form carries `type`, `account`, `amount` and `hash`; with
/// `raw` set the node adds the full block fields, which land in the optional
/// fields or in `extra`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub representative: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Result of `account_history`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountHistory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_default")]
    pub history: Vec<HistoryEntry>,
    /// Hash to pass as `head` to continue towards the open block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    /// Hash to pass as `head` to continue towards the frontier (reverse walks).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

/// Result of `history`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    #[serde(default, deserialize_with = "empty_string_as_default")]
    pub history: Vec<HistoryEntry>,
}
