//! Typed request records and response shapes for each node RPC action.
//!
//! Response types mirror what the node sends: amounts, counts, heights and
//! timestamps stay as the decimal strings the node emits. Fields the node
//! only includes on request (or only in newer versions) are `Option`s, and
//! anything not modelled is kept in a flattened `extra` map.

mod account;
mod block;
mod ledger;
mod params;
mod units;

pub use account::{
    AccountBalance, AccountBlockCount, AccountHistory, AccountId, AccountInfo, AccountKey,
    AccountRepresentative, AccountWeight, AccountsBalances, History, HistoryEntry,
};
pub use block::{
    BlockContents, BlockCount, BlockCountByType, BlockHashes, BlockInfo, BlockResponse, Blocks,
    BlocksInfo, CreatedBlock, ProcessedBlock,
};
pub use ledger::{
    AvailableSupply, FrontierCount, Frontiers, Ledger, LedgerEntry, NodeVersion,
    OnlineRepresentatives, PeerDetails, PeerInfo, Peers, Representatives,
};
pub use params::{
    AccountHistoryOptions, AccountInfoOptions, BlockCreateRequest, BlockKind, LedgerOptions,
};
pub use units::{Amount, ConvertedAmount};

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub(crate) fn is_false(flag: &bool) -> bool {
    !*flag
}

/// Decode a value the node may send either inline or as a JSON-encoded string.
pub(crate) fn embedded_json<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::String(encoded) => serde_json::from_str(&encoded).map_err(D::Error::custom),
        other => serde_json::from_value(other).map_err(D::Error::custom),
    }
}

/// The node reports an empty list or map as `""`; read that as the default.
pub(crate) fn empty_string_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) if s.is_empty() => Ok(T::default()),
        Value::Null => Ok(T::default()),
        other => serde_json::from_value(other).map_err(D::Error::custom),
    }
}
