pub mod types;

pub use crate::types::{
    BlockTag, EthRequestMethod, RpcErrorMetadata, RpcErrorResponse, RpcRequest, RpcRequestId,
    RpcResponse, RpcSuccessResponse,
};

pub mod prelude {
    pub use crate::types::*;
}
