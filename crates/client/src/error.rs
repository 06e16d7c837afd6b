pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Request cancelled")]
    Cancelled,
    #[error("Connection error: {0}")]
    Connection(String),
    #[error("Invalid quantity in RPC result: {0}")]
    InvalidQuantity(String),
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("RPC error {code}: {message}")]
    Rpc { code: i32, message: String },
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
