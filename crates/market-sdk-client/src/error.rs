use market_sdk_types::DecodeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("RPC response for `{0}` carried no result")]
    MissingResult(&'static str),

    #[error("ABI decode error: {0}")]
    Abi(#[from] ethers_core::abi::AbiError),

    #[error("ABI value is not the expected `{0}`")]
    UnexpectedAbi(&'static str),

    #[error("malformed market item: {0}")]
    MalformedItem(#[from] DecodeError),

    #[error("no mock response configured for method `{0}`")]
    NoMockResponse(String),
}
