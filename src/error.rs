//! Error types for drey.
//!
//! One flat error enum; operations propagate with `?` and the binary
//! turns the final error into a stderr message plus exit code 1.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("store not initialized: no recipient configured")]
    NotInitialized,

    #[error("invalid secret name: {0}")]
    InvalidName(String),

    #[error("refusing {0}: resolves outside the password store")]
    PathEscape(String),

    #[error("{0} is not in the password store")]
    NotFound(String),

    #[error("{0} is a namespace (use --recursive to delete it)")]
    IsNamespace(String),

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("listing failed: {0}")]
    ListingFailed(String),

    #[error("{0} not found on PATH")]
    AgentNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
