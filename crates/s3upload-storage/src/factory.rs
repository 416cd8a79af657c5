#[cfg(feature = "storage-s3")]
use crate::S3Storage;
use crate::{Storage, StorageResult};
use s3upload_core::Config;
use std::sync::Arc;

/// Create the storage backend described by the configuration
#[cfg(feature = "storage-s3")]
pub async fn create_storage(config: &Config) -> StorageResult<Arc<dyn Storage>> {
    let storage = S3Storage::new(config.s3()).await?;
    Ok(Arc::new(storage))
}

#[cfg(not(feature = "storage-s3"))]
pub async fn create_storage(_config: &Config) -> StorageResult<Arc<dyn Storage>> {
    Err(crate::StorageError::ConfigError(
        "S3 storage backend not available (storage-s3 feature not enabled)".to_string(),
    ))
}
