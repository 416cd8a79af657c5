//! Process-wide constants.

/// TCP port the HTTP server binds to.
pub const SERVER_PORT: u16 = 8080;

/// Region sent with every S3 request, regardless of the configured endpoint.
pub const S3_REGION: &str = "ap-south-1";

/// Base name of the YAML configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "app";

/// Extensions tried after the bare name, in order.
pub const CONFIG_FILE_EXTENSIONS: &[&str] = &["yaml", "yml"];
