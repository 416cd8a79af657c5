//! s3upload Storage Library
//!
//! This crate provides the storage abstraction used by the upload handler
//! and its S3-compatible implementation.
//!
//! Objects are keyed exactly by the name the caller passes in. There is no
//! prefixing, sanitization or collision avoidance: putting the same key twice
//! overwrites the first object.

pub mod factory;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
