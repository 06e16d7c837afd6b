use alloy_primitives::{Address, B256, Bytes, U256};
use gaslift_rpc_core::{BlockTag, EthRequestMethod, RpcRequest};
use serde::de::DeserializeOwned;
use serde_json::json;
use tokio_util::sync::CancellationToken;

use crate::{
    EthClient,
    error::{Error, Result},
    utils::{create_rpc_request, parse_quantity, send_request_once},
};

pub struct RequestBuilder<'a> {
    client: &'a EthClient,
    cancellation: Option<CancellationToken>,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(client: &'a EthClient) -> Self {
        Self {
            client,
            cancellation: None,
        }
    }

    /// Bounds the call with a caller-owned token. A token that is already
    /// cancelled short-circuits before anything is sent; a token cancelled
    /// mid-flight aborts the request.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    async fn send_rpc_request<T>(&self, request: &RpcRequest) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let inner = &self.client.inner;

        match &self.cancellation {
            Some(token) if token.is_cancelled() => Err(Error::Cancelled),
            Some(token) => {
                tokio::select! {
                    _ = token.cancelled() => Err(Error::Cancelled),
                    response = send_request_once(&inner.client, request, &inner.endpoint) => response,
                }
            }
            None => send_request_once(&inner.client, request, &inner.endpoint).await,
        }
    }

    pub async fn pending_code_at(self, account: Address) -> Result<Bytes> {
        self.get_code(account, BlockTag::Latest).await
    }

    pub async fn get_code(self, account: Address, tag: BlockTag) -> Result<Bytes> {
        let request = create_rpc_request(
            EthRequestMethod::GetCode,
            Some(vec![json!(account), json!(tag)]),
        );

        self.send_rpc_request(&request).await
    }

    pub async fn chain_id(self) -> Result<U256> {
        let request = create_rpc_request(EthRequestMethod::ChainId, None);

        self.send_rpc_request(&request).await
    }

    pub async fn block_number(self) -> Result<u64> {
        let request = create_rpc_request(EthRequestMethod::BlockNumber, None);

        let quantity: String = self.send_rpc_request(&request).await?;
        parse_quantity(&quantity)
    }

    pub async fn get_balance(self, account: Address, tag: BlockTag) -> Result<U256> {
        let request = create_rpc_request(
            EthRequestMethod::GetBalance,
            Some(vec![json!(account), json!(tag)]),
        );

        self.send_rpc_request(&request).await
    }

    pub async fn get_transaction_count(self, account: Address, tag: BlockTag) -> Result<u64> {
        let request = create_rpc_request(
            EthRequestMethod::GetTransactionCount,
            Some(vec![json!(account), json!(tag)]),
        );

        let quantity: String = self.send_rpc_request(&request).await?;
        parse_quantity(&quantity)
    }

    pub async fn gas_price(self) -> Result<U256> {
        let request = create_rpc_request(EthRequestMethod::GasPrice, None);

        self.send_rpc_request(&request).await
    }

    pub async fn send_raw_transaction(self, data: &[u8]) -> Result<B256> {
        let request = create_rpc_request(
            EthRequestMethod::SendRawTransaction,
            Some(vec![json!(Bytes::copy_from_slice(data))]),
        );

        self.send_rpc_request(&request).await
    }
}
