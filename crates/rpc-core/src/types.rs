use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    pub id: RpcRequestId,
    pub jsonrpc: String,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<Value>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcRequestId {
    Number(u64),
    String(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcSuccessResponse {
    pub id: RpcRequestId,
    pub jsonrpc: String,
    pub result: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcErrorMetadata {
    pub code: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcErrorResponse {
    pub id: Option<RpcRequestId>,
    pub jsonrpc: String,
    pub error: RpcErrorMetadata,
}

// A success response carries `result`, an error response carries `error`;
// the untagged repr picks the arm from whichever field is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcResponse {
    Success(RpcSuccessResponse),
    Error(RpcErrorResponse),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EthRequestMethod {
    BlockNumber,
    ChainId,
    GasPrice,
    GetBalance,
    GetCode,
    GetTransactionCount,
    SendRawTransaction,
}

impl EthRequestMethod {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BlockNumber => "eth_blockNumber",
            Self::ChainId => "eth_chainId",
            Self::GasPrice => "eth_gasPrice",
            Self::GetBalance => "eth_getBalance",
            Self::GetCode => "eth_getCode",
            Self::GetTransactionCount => "eth_getTransactionCount",
            Self::SendRawTransaction => "eth_sendRawTransaction",
        }
    }
}

impl fmt::Display for EthRequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockTag {
    Earliest,
    Finalized,
    #[default]
    Latest,
    Pending,
    Safe,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn response_with_result_parses_as_success() {
        let raw = json!({"id": 1, "jsonrpc": "2.0", "result": "0x6080"});
        let response: RpcResponse = serde_json::from_value(raw).unwrap();
        match response {
            RpcResponse::Success(ok) => {
                assert_eq!(ok.id, RpcRequestId::Number(1));
                assert_eq!(ok.result, json!("0x6080"));
            }
            RpcResponse::Error(_) => panic!("expected success arm"),
        }
    }

    #[test]
    fn response_with_error_parses_as_error() {
        let raw = json!({
            "id": 1,
            "jsonrpc": "2.0",
            "error": {"code": -32000, "message": "execution reverted"}
        });
        let response: RpcResponse = serde_json::from_value(raw).unwrap();
        match response {
            RpcResponse::Error(err) => {
                assert_eq!(err.error.code, -32000);
                assert_eq!(err.error.message, "execution reverted");
                assert!(err.error.data.is_none());
            }
            RpcResponse::Success(_) => panic!("expected error arm"),
        }
    }

    #[test]
    fn error_response_accepts_null_id() {
        let raw = json!({
            "id": null,
            "jsonrpc": "2.0",
            "error": {"code": -32700, "message": "parse error"}
        });
        let response: RpcResponse = serde_json::from_value(raw).unwrap();
        match response {
            RpcResponse::Error(err) => assert!(err.id.is_none()),
            RpcResponse::Success(_) => panic!("expected error arm"),
        }
    }

    #[test]
    fn request_serializes_protocol_version_and_method() {
        let request = RpcRequest {
            id: RpcRequestId::Number(1),
            jsonrpc: "2.0".to_string(),
            method: EthRequestMethod::GetCode.as_str().to_string(),
            params: Some(vec![json!("0x0000000000000000000000000000000000000001")]),
        };
        let raw = serde_json::to_value(&request).unwrap();
        assert_eq!(raw.get("jsonrpc").and_then(Value::as_str), Some("2.0"));
        assert_eq!(raw.get("method").and_then(Value::as_str), Some("eth_getCode"));
        assert_eq!(raw.get("id").and_then(Value::as_u64), Some(1));
    }

    #[test]
    fn request_without_params_omits_the_field() {
        let request = RpcRequest {
            id: RpcRequestId::Number(1),
            jsonrpc: "2.0".to_string(),
            method: EthRequestMethod::ChainId.as_str().to_string(),
            params: None,
        };
        let raw = serde_json::to_value(&request).unwrap();
        assert!(raw.get("params").is_none());
    }

    #[test]
    fn block_tags_serialize_lowercase() {
        assert_eq!(serde_json::to_value(BlockTag::Latest).unwrap(), json!("latest"));
        assert_eq!(serde_json::to_value(BlockTag::Pending).unwrap(), json!("pending"));
        assert_eq!(serde_json::to_value(BlockTag::Safe).unwrap(), json!("safe"));
        assert_eq!(
            serde_json::to_value(BlockTag::Finalized).unwrap(),
            json!("finalized")
        );
        assert_eq!(
            serde_json::to_value(BlockTag::Earliest).unwrap(),
            json!("earliest")
        );
    }

    #[test]
    fn string_request_ids_round_trip() {
        let id: RpcRequestId = serde_json::from_value(json!("req-7")).unwrap();
        assert_eq!(id, RpcRequestId::String("req-7".to_string()));
        assert_eq!(serde_json::to_value(&id).unwrap(), json!("req-7"));
    }
}
