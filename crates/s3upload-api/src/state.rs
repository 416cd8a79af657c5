//! Application state shared by all request handlers.
//!
//! Both fields are read-only after startup. `storage` wraps a client that is
//! safe to use from concurrent requests, so no locking is involved.

use s3upload_core::Config;
use s3upload_storage::Storage;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(config: Config, storage: Arc<dyn Storage>) -> Self {
        Self { config, storage }
    }
}
