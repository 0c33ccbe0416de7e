use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("gateway host is not configured: {0}")]
    MissingGatewayHost(#[from] std::env::VarError),

    #[error("no mock metadata configured for `{0}`")]
    NoMockMetadata(String),
}
