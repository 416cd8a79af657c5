//! API constants
//!
//! Route, form field and success text. Failure texts live on
//! [`UploadError`](crate::error::UploadError). All of them are part of the
//! wire contract with existing clients and must not change.

/// Upload route.
pub const UPLOAD_PATH: &str = "/upload";

/// Multipart form field carrying the file.
pub const UPLOAD_FIELD: &str = "file";

pub const MSG_UPLOAD_SUCCESS: &str = "文件上传成功";
