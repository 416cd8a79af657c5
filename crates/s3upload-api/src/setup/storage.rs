//! Storage setup and initialization

use anyhow::{Context, Result};
use s3upload_core::Config;
use s3upload_storage::{create_storage, Storage};
use std::sync::Arc;

/// Build the storage client shared by all requests.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    tracing::info!("Initializing storage client...");
    let storage = create_storage(config)
        .await
        .context("Failed to initialize storage client")?;
    tracing::info!(
        endpoint = %config.endpoint(),
        "Storage client initialized successfully"
    );
    Ok(storage)
}
