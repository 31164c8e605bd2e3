use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::empty_string_as_default;

// ==============================================================================
// Ledger & Frontiers
// ==============================================================================

/// One account row of `ledger`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub frontier: String,
    pub open_block: String,
    pub representative_block: String,
    pub balance: String,
    pub modified_timestamp: String,
    pub block_count: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub representative: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending: Option<String>,
}

/// Result of `ledger`, keyed by account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(deserialize_with = "empty_string_as_default")]
    pub accounts: BTreeMap<String, LedgerEntry>,
}

/// Result of `frontiers`: account → frontier block hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frontiers {
    #[serde(deserialize_with = "empty_string_as_default")]
    pub frontiers: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontierCount {
    pub count: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableSupply {
    pub available: String,
}

// ==============================================================================
// Representatives & Peers
// ==============================================================================

/// Result of `representatives`: account → voting weight in raw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Representatives {
    #[serde(deserialize_with = "empty_string_as_default")]
    pub representatives: BTreeMap<String, String>,
}

/// Result of `representatives_online`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnlineRepresentatives {
    #[serde(default, deserialize_with = "empty_string_as_default")]
    pub representatives: Vec<String>,
}

/// What the node knows about one peer.
///
/// Older nodes report only the protocol version; newer ones (and
/// `peer_details`) report an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PeerInfo {
    ProtocolVersion(String),
    Details(PeerDetails),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerDetails {
    pub protocol_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Result of `peers`, keyed by `[address]:port`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peers {
    #[serde(deserialize_with = "empty_string_as_default")]
    pub peers: BTreeMap<String, PeerInfo>,
}

// ==============================================================================
// Node
// ==============================================================================

/// Result of `version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeVersion {
    pub rpc_version: String,
    pub store_version: String,
    pub node_vendor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
