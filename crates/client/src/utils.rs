use gaslift_rpc_core::{EthRequestMethod, RpcRequest, RpcRequestId, RpcResponse};
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

pub fn parse_url(url: &str) -> Result<Url> {
    Url::parse(url).map_err(|error| Error::Connection(error.to_string()))
}

pub fn create_rpc_request(
    method: EthRequestMethod,
    params: Option<Vec<serde_json::Value>>,
) -> RpcRequest {
    RpcRequest {
        id: RpcRequestId::Number(1),
        jsonrpc: "2.0".to_string(),
        method: method.as_str().to_string(),
        params,
    }
}

// Quantities come back as 0x-prefixed hex with no leading zeros.
pub fn parse_quantity(value: &str) -> Result<u64> {
    let digits = value
        .strip_prefix("0x")
        .ok_or_else(|| Error::InvalidQuantity(value.to_owned()))?;

    u64::from_str_radix(digits, 16).map_err(|_| Error::InvalidQuantity(value.to_owned()))
}

pub async fn send_request_once<T>(
    client: &reqwest::Client,
    request: &RpcRequest,
    url: &Url,
) -> Result<T>
where
    T: DeserializeOwned,
{
    tracing::trace!(method = %request.method, url = %url, "Sending RPC request");

    let response = client
        .post(url.as_ref())
        .header("content-type", "application/json")
        .body(serde_json::to_string(request)?)
        .send()
        .await?
        .json::<RpcResponse>()
        .await?;

    match response {
        RpcResponse::Success(ok_response) => Ok(serde_json::from_value::<T>(ok_response.result)?),
        RpcResponse::Error(error_response) => {
            tracing::debug!(
                method = %request.method,
                code = error_response.error.code,
                message = %error_response.error.message,
                "RPC request failed"
            );

            Err(Error::Rpc {
                code: error_response.error.code,
                message: error_response.error.message,
            })
        }
    }
}
