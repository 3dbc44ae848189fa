use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserStoreError {
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("RPC call failed: {0}")]
    RpcFailure(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::net::AddrParseError> for UserStoreError {
    fn from(err: std::net::AddrParseError) -> Self {
        UserStoreError::InvalidRequest(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, UserStoreError>;
