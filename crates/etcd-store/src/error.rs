//! Store client errors

use thiserror::Error;

/// Errors that can occur when talking to the etcd gateway
#[derive(Debug, Error)]
pub enum StoreError {
    /// HTTP request/response error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway returned a non-success response
    #[error("etcd gateway error: {0}")]
    Api(String),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A stored key or value could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// A named lock could not be acquired
    #[error("Lock acquisition failed: {0}")]
    Lock(String),
}
