use std::collections::BTreeMap;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::{embedded_json, empty_string_as_default};

// ==============================================================================
// Block Contents
// ==============================================================================

/// The body of a ledger block.
///
/// Legacy blocks (`send`, `receive`, `open`, `change`) and `state` blocks
/// share this one shape; fields a block type does not have are `None`.
/// Fields not listed here are preserved in `extra`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockContents {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub representative: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_as_account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// `blocks` maps hashes to contents that may each be JSON-encoded strings.
fn embedded_json_map<'de, D, T>(deserializer: D) -> Result<BTreeMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw: BTreeMap<String, Value> = empty_string_as_default(deserializer)?;
    raw.into_iter()
        .map(|(hash, value)| {
            let decoded = match value {
                Value::String(encoded) => serde_json::from_str(&encoded),
                other => serde_json::from_value(other),
            };
            decoded
                .map(|contents| (hash.clone(), contents))
                .map_err(|e| D::Error::custom(format!("block {hash}: {e}")))
        })
        .collect()
}

// ==============================================================================
// Single & Multi Block Lookups
// ==============================================================================

/// Result of `block`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockResponse {
    #[serde(deserialize_with = "embedded_json")]
    pub contents: BlockContents,
}

/// Result of `blocks`, keyed by block hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blocks {
    #[serde(deserialize_with = "embedded_json_map")]
    pub blocks: BTreeMap<String, BlockContents>,
}

/// One entry of `blocks_info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockInfo {
    pub block_account: String,
    pub amount: String,
    #[serde(deserialize_with = "embedded_json")]
    pub contents: BlockContents,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    /// Present when `source` was requested and the block is a receive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_account: Option<String>,
    /// Present when `pending` was requested for a send block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending: Option<String>,
}

/// Result of `blocks_info`, keyed by block hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlocksInfo {
    #[serde(deserialize_with = "empty_string_as_default")]
    pub blocks: BTreeMap<String, BlockInfo>,
}

/// Ordered block hashes from `chain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHashes {
    #[serde(default, deserialize_with = "empty_string_as_default")]
    pub blocks: Vec<String>,
}

// ==============================================================================
// Counters
// ==============================================================================

/// Result of `block_count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockCount {
    pub count: String,
    pub unchecked: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cemented: Option<String>,
}

/// Result of `block_count_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockCountByType {
    pub send: String,
    pub receive: String,
    pub open: String,
    pub change: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ==============================================================================
// Mutating Calls
// ==============================================================================

/// Result of `block_create`: the signed block and its hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedBlock {
    pub hash: String,
    #[serde(deserialize_with = "embedded_json")]
    pub block: BlockContents,
}

/// Result of `process`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedBlock {
    pub hash: String,
}
