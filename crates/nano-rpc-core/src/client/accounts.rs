use serde::Serialize;

use crate::error::RpcError;
use crate::rpc::Transport;
use crate::types::{
    AccountBalance, AccountBlockCount, AccountHistory, AccountHistoryOptions, AccountId,
    AccountInfo, AccountInfoOptions, AccountKey, AccountRepresentative, AccountWeight,
    AccountsBalances,
};

use super::{NodeClient, DEFAULT_COUNT};

#[derive(Serialize)]
struct AccountArgs<'a> {
    account: &'a str,
}

#[derive(Serialize)]
struct AccountsArgs<'a> {
    accounts: &'a [&'a str],
}

#[derive(Serialize)]
struct KeyArgs<'a> {
    key: &'a str,
}

#[derive(Serialize)]
struct AccountHistoryArgs<'a> {
    account: &'a str,
    count: u64,
    #[serde(flatten)]
    options: &'a AccountHistoryOptions,
}

#[derive(Serialize)]
struct AccountInfoArgs<'a> {
    account: &'a str,
    #[serde(flatten)]
    options: &'a AccountInfoOptions,
}

impl<T: Transport> NodeClient<T> {
    /// Confirmed balance and pending (receivable) amount of `account`, in raw.
    pub async fn account_balance(&self, account: &str) -> Result<AccountBalance, RpcError> {
        self.call("account_balance", &AccountArgs { account }).await
    }

    pub async fn accounts_balances(
        &self,
        accounts: &[&str],
    ) -> Result<AccountsBalances, RpcError> {
        self.call("accounts_balances", &AccountsArgs { accounts })
            .await
    }

    pub async fn account_block_count(
        &self,
        account: &str,
    ) -> Result<AccountBlockCount, RpcError> {
        self.call("account_block_count", &AccountArgs { account })
            .await
    }

    /// Account address for a hex public key.
    pub async fn account_get(&self, key: &str) -> Result<AccountId, RpcError> {
        self.call("account_get", &KeyArgs { key }).await
    }

    /// Up to `count` (default 1) blocks of `account`'s chain, newest first
    /// unless `options.reverse` is set.
    pub async fn account_history(
        &self,
        account: &str,
        count: Option<u64>,
        options: &AccountHistoryOptions,
    ) -> Result<AccountHistory, RpcError> {
        let args = AccountHistoryArgs {
            account,
            count: count.unwrap_or(DEFAULT_COUNT),
            options,
        };
        self.call("account_history", &args).await
    }

    pub async fn account_info(
        &self,
        account: &str,
        options: &AccountInfoOptions,
    ) -> Result<AccountInfo, RpcError> {
        self.call("account_info", &AccountInfoArgs { account, options })
            .await
    }

    /// Hex public key of `account`.
    pub async fn account_key(&self, account: &str) -> Result<AccountKey, RpcError> {
        self.call("account_key", &AccountArgs { account }).await
    }

    pub async fn account_representative(
        &self,
        account: &str,
    ) -> Result<AccountRepresentative, RpcError> {
        self.call("account_representative", &AccountArgs { account })
            .await
    }

    /// Voting weight delegated to `account`, in raw.
    pub async fn account_weight(&self, account: &str) -> Result<AccountWeight, RpcError> {
        self.call("account_weight", &AccountArgs { account }).await
    }
}
