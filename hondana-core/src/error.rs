//! Error types for Hondana Core

use thiserror::Error;

/// Result type alias using HondanaError
pub type Result<T> = std::result::Result<T, HondanaError>;

/// Top-level error type for all Hondana operations
#[derive(Debug, Error)]
pub enum HondanaError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] MetadataError),
}

/// Errors that occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Backend error: {0}")]
    BackendError(String),

    #[error("Malformed stored collection: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Errors raised by the remote catalog client.
///
/// A query with zero matches is not an error; these cover transport and
/// server-side failures only.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog responded with status {0}")]
    Status(u16),
}
