mod client;
mod constants;
pub mod error;
pub mod request_builder;
mod utils;

pub use client::{EthClient, EthClientBuilder};
pub use gaslift_rpc_core::BlockTag;

pub mod prelude {
    pub use crate::{
        BlockTag, EthClient, EthClientBuilder,
        error::{Error, Result},
    };
}
