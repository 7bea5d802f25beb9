use std::path::PathBuf;
use thiserror::Error;

/// Errors generated by the command line tool.
#[derive(Debug, Error)]
pub enum Error {
    #[error("file {0} does not exist")]
    NotFile(PathBuf),

    #[error("a signing key is required, use --key or set {0}")]
    NoSigningKey(&'static str),

    #[error("signing key must be 32 bytes")]
    SigningKey,

    #[error(transparent)]
    Core(#[from] rnode_eth_sign_core::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
