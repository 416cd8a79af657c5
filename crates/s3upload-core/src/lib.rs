//! s3upload core library
//!
//! Configuration and error types shared by the storage and API crates.

pub mod config;
pub mod constants;
pub mod error;

// Re-export commonly used types
pub use config::{Config, S3Config};
pub use error::ConfigError;
