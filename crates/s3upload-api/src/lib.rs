//! s3upload API Library
//!
//! This crate provides the HTTP upload handler and application setup.

pub mod constants;
pub mod error;
mod handlers;
pub mod setup;
pub mod state;
pub mod telemetry;
mod utils;

// Re-exports
pub use error::{ApiResponse, ResponseCode, UploadError};
pub use state::AppState;
