use crate::error::{ApiResponse, UploadError};
use crate::state::AppState;
use crate::utils::upload::{extract_upload_file, UploadedFile};
use axum::extract::{multipart::MultipartRejection, Multipart, State};
use s3upload_storage::StorageError;
use std::sync::Arc;

/// `POST /upload`
///
/// Buffers the `file` part and stores it in the configured bucket under its
/// original file name. Always answers HTTP 200; see [`crate::error`] for the
/// body shapes.
///
/// A request whose content type is not multipart is treated like one with no
/// file, so the extractor rejection is taken as a value instead of letting
/// axum answer 400.
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<ApiResponse, UploadError> {
    let multipart = multipart.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Request is not multipart");
        UploadError::NoFile
    })?;

    let UploadedFile { filename, data } = extract_upload_file(multipart).await?;
    let bucket = state.config.bucket().to_string();

    tracing::info!(
        bucket = %bucket,
        filename = %filename,
        size_bytes = data.len(),
        "Processing upload"
    );

    // The put runs on its own task: if the client goes away and this future is
    // dropped, the store call still completes.
    let storage = state.storage.clone();
    let put = tokio::spawn(async move { storage.put_object(&bucket, &filename, data).await });

    put.await
        .map_err(|e| StorageError::UploadFailed(format!("upload task aborted: {}", e)))??;

    Ok(ApiResponse::success())
}
