use serde::Serialize;

use crate::error::RpcError;
use crate::rpc::Transport;
use crate::types::{Amount, ConvertedAmount};

use super::NodeClient;

#[derive(Serialize)]
struct AmountArgs {
    amount: Amount,
}

// The node does the scaling; these only forward the amount as given.
impl<T: Transport> NodeClient<T> {
    async fn convert(
        &self,
        action: &str,
        amount: impl Into<Amount>,
    ) -> Result<ConvertedAmount, RpcError> {
        let args = AmountArgs {
            amount: amount.into(),
        };
        self.call(action, &args).await
    }

    pub async fn mrai_from_raw(
        &self,
        amount: impl Into<Amount>,
    ) -> Result<ConvertedAmount, RpcError> {
        self.convert("mrai_from_raw", amount).await
    }

    pub async fn mrai_to_raw(
        &self,
        amount: impl Into<Amount>,
    ) -> Result<ConvertedAmount, RpcError> {
        self.convert("mrai_to_raw", amount).await
    }

    pub async fn krai_from_raw(
        &self,
        amount: impl Into<Amount>,
    ) -> Result<ConvertedAmount, RpcError> {
        self.convert("krai_from_raw", amount).await
    }

    pub async fn krai_to_raw(
        &self,
        amount: impl Into<Amount>,
    ) -> Result<ConvertedAmount, RpcError> {
        self.convert("krai_to_raw", amount).await
    }

    pub async fn rai_from_raw(
        &self,
        amount: impl Into<Amount>,
    ) -> Result<ConvertedAmount, RpcError> {
        self.convert("rai_from_raw", amount).await
    }

    pub async fn rai_to_raw(
        &self,
        amount: impl Into<Amount>,
    ) -> Result<ConvertedAmount, RpcError> {
        self.convert("rai_to_raw", amount).await
    }
}
