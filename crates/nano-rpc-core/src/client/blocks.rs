use serde::Serialize;

use crate::error::RpcError;
use crate::rpc::Transport;
use crate::types::{
    is_false, AccountId, BlockCount, BlockCountByType, BlockCreateRequest, BlockHashes,
    BlockResponse, Blocks, BlocksInfo, CreatedBlock, History, ProcessedBlock,
};

use super::{NodeClient, DEFAULT_COUNT};

#[derive(Serialize)]
struct HashArgs<'a> {
    hash: &'a str,
}

#[derive(Serialize)]
struct HashesArgs<'a> {
    hashes: &'a [&'a str],
}

#[derive(Serialize)]
struct BlocksInfoArgs<'a> {
    hashes: &'a [&'a str],
    #[serde(skip_serializing_if = "is_false")]
    source: bool,
    #[serde(skip_serializing_if = "is_false")]
    pending: bool,
}

#[derive(Serialize)]
struct ChainArgs<'a> {
    block: &'a str,
    count: u64,
}

#[derive(Serialize)]
struct HistoryArgs<'a> {
    hash: &'a str,
    count: u64,
}

#[derive(Serialize)]
struct ProcessArgs<'a> {
    block: &'a str,
}

impl<T: Transport> NodeClient<T> {
    pub async fn block(&self, hash: &str) -> Result<BlockResponse, RpcError> {
        self.call("block", &HashArgs { hash }).await
    }

    pub async fn blocks(&self, hashes: &[&str]) -> Result<Blocks, RpcError> {
        self.call("blocks", &HashesArgs { hashes }).await
    }

    /// Account that owns the block `hash`.
    pub async fn block_account(&self, hash: &str) -> Result<AccountId, RpcError> {
        self.call("block_account", &HashArgs { hash }).await
    }

    pub async fn block_count(&self) -> Result<BlockCount, RpcError> {
        self.call("block_count", &()).await
    }

    /// Contents plus ledger metadata for each of `hashes`.
    ///
    /// `source` adds the sending account for receive blocks; `pending` adds
    /// whether a send is still unreceived.
    pub async fn blocks_info(
        &self,
        hashes: &[&str],
        source: bool,
        pending: bool,
    ) -> Result<BlocksInfo, RpcError> {
        let args = BlocksInfoArgs {
            hashes,
            source,
            pending,
        };
        self.call("blocks_info", &args).await
    }

    pub async fn block_count_type(&self) -> Result<BlockCountByType, RpcError> {
        self.call("block_count_type", &()).await
    }

    /// Up to `count` (default 1) hashes walking back from `block`.
    pub async fn chain(&self, block: &str, count: Option<u64>) -> Result<BlockHashes, RpcError> {
        let args = ChainArgs {
            block,
            count: count.unwrap_or(DEFAULT_COUNT),
        };
        self.call("chain", &args).await
    }

    pub async fn history(&self, hash: &str, count: Option<u64>) -> Result<History, RpcError> {
        let args = HistoryArgs {
            hash,
            count: count.unwrap_or(DEFAULT_COUNT),
        };
        self.call("history", &args).await
    }

    /// Ask the node to build and sign a block. Nothing is published.
    pub async fn block_create(
        &self,
        request: &BlockCreateRequest,
    ) -> Result<CreatedBlock, RpcError> {
        self.call("block_create", request).await
    }

    /// Publish a signed block, given as its JSON text.
    pub async fn process(&self, block: &str) -> Result<ProcessedBlock, RpcError> {
        self.call("process", &ProcessArgs { block }).await
    }
}
