use thiserror::Error;

pub type ChainResult<T> = Result<T, ChainError>;

/// Errors surfaced by a [`ChainApi`](crate::ChainApi) implementation.
#[derive(Error, Debug)]
pub enum ChainError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("rpc error: {0}")]
    Rpc(String),

    #[error("signing failed: {0}")]
    Signing(String),

    #[error("state decode error: {0}")]
    Decode(String),
}

pub type KeystoreResult<T> = Result<T, KeystoreError>;

/// Errors reading a keystore envelope or its password file.
#[derive(Error, Debug)]
pub enum KeystoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("keystore parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("keystore at {0} declares no signing scheme")]
    MissingScheme(String),
}
