//! Error types module
//!
//! Startup errors. Any of these is fatal: the server must not start
//! without a complete configuration.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file '{name}' not found in {}", .dir.display())]
    NotFound { name: String, dir: PathBuf },

    #[error("read config file {} failed: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unmarshal config file failed: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("config key '{0}' must be set to a non-empty value")]
    MissingField(&'static str),
}
