//! Storage abstraction trait
//!
//! This module defines the Storage trait that storage backends implement.

use async_trait::async_trait;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// The transport gave up on the request (operation or connect timeout).
    #[error("upload canceled due to timeout, {0}")]
    Canceled(String),

    #[error("failed to upload object, {0}")]
    UploadFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl StorageError {
    pub fn is_canceled(&self) -> bool {
        matches!(self, StorageError::Canceled(_))
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// Implementations must be safe to share between concurrently running
/// request handlers; a single instance is built at startup and reused.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Store `data` under `key` in `bucket`, replacing any existing object.
    async fn put_object(&self, bucket: &str, key: &str, data: Vec<u8>) -> StorageResult<()>;
}
