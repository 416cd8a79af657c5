//! HTTP response envelope and upload errors
//!
//! Every outcome of `POST /upload` is sent with HTTP status 200. Success and
//! failure are told apart only by the `code` field of the JSON body:
//!
//! | outcome          | body                                          |
//! |------------------|-----------------------------------------------|
//! | success          | `{"code":200,"msg":"文件上传成功"}`           |
//! | no file          | `{"code":500,"msg":"没有指定上传文件"}`       |
//! | storage failure  | `{"code":"500","msg":"上传失败<error text>"}` |
//!
//! The storage failure path sends `code` as a string while the no-file path
//! sends a number. Existing clients depend on both shapes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use s3upload_storage::StorageError;
use serde::Serialize;

use crate::constants::MSG_UPLOAD_SUCCESS;

/// Application-level status carried in the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseCode {
    Number(u16),
    Text(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponse {
    pub code: ResponseCode,
    pub msg: String,
}

impl ApiResponse {
    pub fn success() -> Self {
        Self {
            code: ResponseCode::Number(200),
            msg: MSG_UPLOAD_SUCCESS.to_string(),
        }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// No `file` part, a `file` part without a file name, or a body that is
    /// not valid multipart.
    #[error("没有指定上传文件")]
    NoFile,

    #[error("上传失败{0}")]
    Storage(#[from] StorageError),
}

impl UploadError {
    pub fn code(&self) -> ResponseCode {
        match self {
            UploadError::NoFile => ResponseCode::Number(500),
            UploadError::Storage(_) => ResponseCode::Text("500"),
        }
    }

    pub fn to_response(&self) -> ApiResponse {
        ApiResponse {
            code: self.code(),
            msg: self.to_string(),
        }
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        match &self {
            UploadError::NoFile => {
                tracing::debug!(error = %self, "Upload rejected");
            }
            UploadError::Storage(source) => {
                tracing::warn!(
                    error = %source,
                    canceled = source.is_canceled(),
                    "Upload failed"
                );
            }
        }

        self.to_response().into_response()
    }
}
