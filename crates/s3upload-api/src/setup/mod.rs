//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from main.rs
//! for better organization and testability.

pub mod routes;
pub mod server;
pub mod storage;

use crate::state::AppState;
use anyhow::Result;
use s3upload_core::Config;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    tracing::info!(
        endpoint = %config.endpoint(),
        bucket = %config.bucket(),
        region = config.region(),
        path_style = config.path_style(),
        "Configuration loaded and validated successfully"
    );

    // Setup storage
    let storage = storage::setup_storage(&config).await?;

    let state = Arc::new(AppState::new(config, storage));

    // Setup routes
    let router = routes::setup_routes(state.clone());

    Ok((state, router))
}
