//! Configuration module
//!
//! The configuration is read once at startup from a YAML file named `app`
//! in the working directory and is never mutated afterwards. It is passed
//! explicitly to the storage and API setup code.
//!
//! ```yaml
//! endpoint: http://localhost:9000
//! bucket: uploads
//! accesskey: minioadmin
//! secretkey: minioadmin
//! pathstyle: true
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::constants::{CONFIG_FILE_EXTENSIONS, CONFIG_FILE_NAME, S3_REGION, SERVER_PORT};
use crate::error::ConfigError;

/// Object storage settings as they appear in the config file.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct S3Config {
    #[serde(default)]
    pub endpoint: String,
    #[serde(default)]
    pub bucket: String,
    #[serde(default, rename = "accesskey")]
    pub access_key: String,
    #[serde(default, rename = "secretkey")]
    pub secret_key: String,
    /// Use `endpoint/bucket/key` addressing instead of `bucket.endpoint/key`.
    #[serde(default, rename = "pathstyle")]
    pub path_style: bool,
    /// Whole-operation timeout for a single put. Unset means no timeout.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl S3Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("endpoint", &self.endpoint),
            ("bucket", &self.bucket),
            ("accesskey", &self.access_key),
            ("secretkey", &self.secret_key),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingField(key));
            }
        }
        Ok(())
    }

    pub fn operation_timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|&secs| secs > 0)
            .map(Duration::from_secs)
    }
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    s3: S3Config,
}

impl Config {
    /// Build a configuration from already-parsed settings.
    pub fn new(s3: S3Config) -> Result<Self, ConfigError> {
        s3.validate()?;
        Ok(Config { s3 })
    }

    /// Load `app` from the current working directory.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_dir(".")
    }

    /// Load `app`, `app.yaml` or `app.yml` (first match wins) from `dir`.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = locate_config_file(dir.as_ref())?;
        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let s3: S3Config = serde_yaml::from_str(content)?;
        Self::new(s3)
    }

    pub fn s3(&self) -> &S3Config {
        &self.s3
    }

    pub fn bucket(&self) -> &str {
        &self.s3.bucket
    }

    pub fn endpoint(&self) -> &str {
        &self.s3.endpoint
    }

    pub fn path_style(&self) -> bool {
        self.s3.path_style
    }

    pub fn region(&self) -> &'static str {
        S3_REGION
    }

    pub fn server_port(&self) -> u16 {
        SERVER_PORT
    }
}

fn locate_config_file(dir: &Path) -> Result<PathBuf, ConfigError> {
    let bare = dir.join(CONFIG_FILE_NAME);
    let candidates = std::iter::once(bare).chain(
        CONFIG_FILE_EXTENSIONS
            .iter()
            .map(|ext| dir.join(format!("{}.{}", CONFIG_FILE_NAME, ext))),
    );

    for candidate in candidates {
        if candidate.is_file() {
            return Ok(candidate);
        }
    }

    Err(ConfigError::NotFound {
        name: CONFIG_FILE_NAME.to_string(),
        dir: dir.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const VALID: &str = "endpoint: http://localhost:9000\nbucket: uploads\naccesskey: ak\nsecretkey: sk\npathstyle: true\n";

    #[test]
    fn parses_all_keys() {
        let config = Config::from_yaml_str(VALID).unwrap();
        assert_eq!(config.endpoint(), "http://localhost:9000");
        assert_eq!(config.bucket(), "uploads");
        assert_eq!(config.s3().access_key, "ak");
        assert_eq!(config.s3().secret_key, "sk");
        assert!(config.path_style());
        assert_eq!(config.s3().operation_timeout(), None);
    }

    #[test]
    fn pathstyle_defaults_to_false() {
        let config = Config::from_yaml_str(
            "endpoint: https://s3.example.com\nbucket: b\naccesskey: ak\nsecretkey: sk\n",
        )
        .unwrap();
        assert!(!config.path_style());
    }

    #[test]
    fn region_and_port_are_fixed() {
        let config = Config::from_yaml_str(VALID).unwrap();
        assert_eq!(config.region(), "ap-south-1");
        assert_eq!(config.server_port(), 8080);
    }

    #[test]
    fn rejects_missing_bucket() {
        let err = Config::from_yaml_str(
            "endpoint: http://localhost:9000\naccesskey: ak\nsecretkey: sk\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("bucket")));
    }

    #[test]
    fn rejects_blank_secret() {
        let err = Config::from_yaml_str(
            "endpoint: http://localhost:9000\nbucket: b\naccesskey: ak\nsecretkey: '  '\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("secretkey")));
    }

    #[test]
    fn rejects_unparsable_yaml() {
        let err = Config::from_yaml_str("endpoint: [unterminated").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn zero_timeout_means_none() {
        let s3 = S3Config {
            timeout_secs: Some(0),
            ..Default::default()
        };
        assert_eq!(s3.operation_timeout(), None);

        let s3 = S3Config {
            timeout_secs: Some(30),
            ..Default::default()
        };
        assert_eq!(s3.operation_timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn loads_bare_app_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("app"), VALID).unwrap();

        let config = Config::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.bucket(), "uploads");
    }

    #[test]
    fn bare_name_wins_over_extension() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("app"), VALID).unwrap();
        fs::write(
            dir.path().join("app.yaml"),
            VALID.replace("uploads", "other"),
        )
        .unwrap();

        let config = Config::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.bucket(), "uploads");
    }

    #[test]
    fn falls_back_to_yml_extension() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("app.yml"), VALID).unwrap();

        let config = Config::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.bucket(), "uploads");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let err = Config::load_from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }
}
