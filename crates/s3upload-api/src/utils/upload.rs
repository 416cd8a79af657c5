use axum::extract::Multipart;

use crate::constants::UPLOAD_FIELD;
use crate::error::UploadError;

/// File taken from the request, owned by one handler invocation.
#[derive(Debug)]
pub struct UploadedFile {
    /// Name as sent by the client. Used unchanged as the object key.
    pub filename: String,
    pub data: Vec<u8>,
}

/// Extract the first `file` part that carries a file name.
///
/// Parts with other names, and a `file` part sent as a plain form value,
/// are skipped. Any multipart decoding error, including one raised while
/// reading the file bytes, is reported as [`UploadError::NoFile`].
pub async fn extract_upload_file(mut multipart: Multipart) -> Result<UploadedFile, UploadError> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Err(UploadError::NoFile),
            Err(e) => {
                tracing::debug!(error = %e, "Failed to read multipart");
                return Err(UploadError::NoFile);
            }
        };

        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let filename = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => continue,
        };

        let data = field.bytes().await.map_err(|e| {
            tracing::debug!(error = %e, filename = %filename, "Failed to read file data");
            UploadError::NoFile
        })?;

        return Ok(UploadedFile {
            filename,
            data: data.to_vec(),
        });
    }
}
