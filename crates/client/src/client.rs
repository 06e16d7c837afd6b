use crate::{
    constants::DEFAULT_TIMEOUT,
    error::{Error, Result},
    request_builder::RequestBuilder,
    utils::parse_url,
};
use alloy_primitives::{Address, B256, Bytes, U256};
use gaslift_rpc_core::BlockTag;
use reqwest::{ClientBuilder, Url};
use std::{sync::Arc, time::Duration};

#[derive(Default)]
pub struct EthClientBuilder {
    endpoint: Option<String>,
    http_client: Option<reqwest::Client>,
    timeout: Duration,
}

impl EthClientBuilder {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            ..Default::default()
        }
    }

    pub fn endpoint<S: Into<String>>(mut self, endpoint: S) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Swap in a pre-configured HTTP transport. The supplied client keeps
    /// whatever timeout, proxy, and TLS configuration it was built with;
    /// `timeout` only applies when the builder constructs the transport
    /// itself.
    pub fn http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<EthClient> {
        let endpoint = self
            .endpoint
            .ok_or_else(|| Error::Connection("no endpoint configured".to_owned()))?;
        let endpoint = parse_url(&endpoint)?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => ClientBuilder::new()
                .timeout(self.timeout)
                .build()
                .map_err(|error| Error::Connection(error.to_string()))?,
        };

        Ok(EthClient {
            inner: Arc::new(EthClientInner {
                client: http_client,
                endpoint,
            }),
        })
    }
}

/// Handle over one JSON-RPC-over-HTTP endpoint. Construct once, reuse for
/// many calls; clones share the underlying transport.
#[derive(Clone)]
pub struct EthClient {
    pub(crate) inner: Arc<EthClientInner>,
}

pub(crate) struct EthClientInner {
    pub(crate) client: reqwest::Client,
    pub(crate) endpoint: Url,
}

impl EthClient {
    pub fn builder() -> EthClientBuilder {
        EthClientBuilder::new()
    }

    /// Connects to `endpoint` over HTTP with a default transport. No probe
    /// is sent; a malformed endpoint is the only dial-time failure.
    pub fn dial(endpoint: &str) -> Result<Self> {
        Self::builder().endpoint(endpoint).build()
    }

    /// Connects to `endpoint` over HTTP using the supplied transport.
    pub fn dial_with_client(endpoint: &str, http_client: reqwest::Client) -> Result<Self> {
        Self::builder()
            .endpoint(endpoint)
            .http_client(http_client)
            .build()
    }

    pub fn endpoint(&self) -> &Url {
        &self.inner.endpoint
    }

    pub fn request(&self) -> RequestBuilder<'_> {
        RequestBuilder::new(self)
    }

    /// Returns the contract code of the given account in the pending state.
    ///
    /// The query is issued against the `latest` tag. Callers that need
    /// unconfirmed state use [`EthClient::get_code`] with
    /// [`BlockTag::Pending`].
    pub async fn pending_code_at(&self, account: Address) -> Result<Bytes> {
        self.request().pending_code_at(account).await
    }

    pub async fn get_code(&self, account: Address, tag: BlockTag) -> Result<Bytes> {
        self.request().get_code(account, tag).await
    }

    pub async fn chain_id(&self) -> Result<U256> {
        self.request().chain_id().await
    }

    pub async fn block_number(&self) -> Result<u64> {
        self.request().block_number().await
    }

    pub async fn get_balance(&self, account: Address, tag: BlockTag) -> Result<U256> {
        self.request().get_balance(account, tag).await
    }

    pub async fn get_transaction_count(&self, account: Address, tag: BlockTag) -> Result<u64> {
        self.request().get_transaction_count(account, tag).await
    }

    pub async fn gas_price(&self) -> Result<U256> {
        self.request().gas_price().await
    }

    pub async fn send_raw_transaction(&self, data: &[u8]) -> Result<B256> {
        self.request().send_raw_transaction(data).await
    }
}
