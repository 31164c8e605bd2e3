use serde::Serialize;

use crate::error::RpcError;
use crate::rpc::Transport;
use crate::types::{
    is_false, AvailableSupply, FrontierCount, Frontiers, Ledger, LedgerOptions, NodeVersion,
    OnlineRepresentatives, Peers, Representatives,
};

use super::{NodeClient, DEFAULT_COUNT};

#[derive(Serialize)]
struct FrontiersArgs<'a> {
    account: &'a str,
    count: u64,
}

#[derive(Serialize)]
struct LedgerArgs<'a> {
    account: &'a str,
    count: u64,
    #[serde(flatten)]
    options: &'a LedgerOptions,
}

#[derive(Serialize)]
struct RepresentativesArgs {
    count: u64,
    #[serde(skip_serializing_if = "is_false")]
    sorting: bool,
}

impl<T: Transport> NodeClient<T> {
    /// Total supply minus the genesis, burn and reserve balances, in raw.
    pub async fn available_supply(&self) -> Result<AvailableSupply, RpcError> {
        self.call("available_supply", &()).await
    }

    /// Up to `count` (default 1) account frontiers, starting at `account`.
    pub async fn frontiers(
        &self,
        account: &str,
        count: Option<u64>,
    ) -> Result<Frontiers, RpcError> {
        let args = FrontiersArgs {
            account,
            count: count.unwrap_or(DEFAULT_COUNT),
        };
        self.call("frontiers", &args).await
    }

    /// Number of accounts in the ledger (the node's `frontier_count`).
    pub async fn frontiers_count(&self) -> Result<FrontierCount, RpcError> {
        self.call("frontier_count", &()).await
    }

    /// Up to `count` (default 1) ledger rows, starting at `account`.
    pub async fn ledger(
        &self,
        account: &str,
        count: Option<u64>,
        options: &LedgerOptions,
    ) -> Result<Ledger, RpcError> {
        let args = LedgerArgs {
            account,
            count: count.unwrap_or(DEFAULT_COUNT),
            options,
        };
        self.call("ledger", &args).await
    }

    /// Representatives and their voting weight.
    ///
    /// Both `count` (default 1) and `sorting` are forwarded to the node.
    pub async fn representatives(
        &self,
        count: Option<u64>,
        sorting: bool,
    ) -> Result<Representatives, RpcError> {
        let args = RepresentativesArgs {
            count: count.unwrap_or(DEFAULT_COUNT),
            sorting,
        };
        self.call("representatives", &args).await
    }

    pub async fn representatives_online(&self) -> Result<OnlineRepresentatives, RpcError> {
        self.call("representatives_online", &()).await
    }

    pub async fn peers(&self) -> Result<Peers, RpcError> {
        self.call("peers", &()).await
    }

    pub async fn version(&self) -> Result<NodeVersion, RpcError> {
        self.call("version", &()).await
    }
}
