use crate::traits::{Storage, StorageError, StorageResult};
use async_trait::async_trait;
use aws_config::timeout::TimeoutConfig;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::{Credentials, Region, RequestChecksumCalculation};
use aws_sdk_s3::error::{DisplayErrorContext, SdkError};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use aws_sdk_s3::Client;
use s3upload_core::constants::S3_REGION;
use s3upload_core::S3Config;
use std::time::Instant;

const CREDENTIALS_PROVIDER_NAME: &str = "s3upload-static";

/// S3 storage implementation
///
/// Wraps a single `aws_sdk_s3::Client`. The client is internally reference
/// counted and safe to use from many tasks at once, so one `S3Storage` is
/// built at startup and shared by every request.
#[derive(Clone)]
pub struct S3Storage {
    client: Client,
    endpoint_url: String,
}

impl S3Storage {
    /// Create a new S3Storage instance
    ///
    /// Uses the static access/secret key pair from the configuration, the
    /// configured endpoint and the fixed [`S3_REGION`]. `path_style` selects
    /// `endpoint/bucket/key` addressing, which most non-AWS providers (MinIO,
    /// Ceph) require.
    pub async fn new(config: &S3Config) -> StorageResult<Self> {
        if config.endpoint.trim().is_empty() {
            return Err(StorageError::ConfigError(
                "endpoint not configured".to_string(),
            ));
        }

        let credentials = Credentials::new(
            &config.access_key,
            &config.secret_key,
            None,
            None,
            CREDENTIALS_PROVIDER_NAME,
        );

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(S3_REGION))
            .endpoint_url(&config.endpoint)
            .credentials_provider(credentials);

        if let Some(timeout) = config.operation_timeout() {
            loader = loader.timeout_config(
                TimeoutConfig::builder()
                    .operation_timeout(timeout)
                    .build(),
            );
        }

        let sdk_config = loader.load().await;
        // Flexible checksum headers are only sent when an operation requires
        // them; several S3-compatible backends reject them on PutObject.
        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(config.path_style)
            .request_checksum_calculation(RequestChecksumCalculation::WhenRequired)
            .build();

        tracing::debug!(
            endpoint = %config.endpoint,
            region = S3_REGION,
            path_style = config.path_style,
            operation_timeout = ?config.operation_timeout(),
            "S3 client configured"
        );

        Ok(S3Storage {
            client: Client::from_conf(s3_config),
            endpoint_url: config.endpoint.clone(),
        })
    }
}

/// Map an SDK failure onto the two upload error kinds.
///
/// Timeouts raised by the SDK itself, and connector failures the transport
/// reports as timeouts, become [`StorageError::Canceled`]. Everything else is
/// [`StorageError::UploadFailed`]. The full error chain is kept as text.
fn classify_put_error<E, R>(err: SdkError<E, R>) -> StorageError
where
    E: std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let canceled = match &err {
        SdkError::TimeoutError(_) => true,
        SdkError::DispatchFailure(failure) => failure.is_timeout(),
        _ => false,
    };
    let message = DisplayErrorContext(err).to_string();

    if canceled {
        StorageError::Canceled(message)
    } else {
        StorageError::UploadFailed(message)
    }
}

#[async_trait]
impl Storage for S3Storage {
    async fn put_object(&self, bucket: &str, key: &str, data: Vec<u8>) -> StorageResult<()> {
        let size = data.len() as u64;
        let body = ByteStream::from(data);

        let start = Instant::now();

        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(body)
            .acl(ObjectCannedAcl::PublicRead)
            .send()
            .await
            .map_err(|e| {
                let err = classify_put_error(e);
                tracing::error!(
                    error = %err,
                    canceled = err.is_canceled(),
                    endpoint = %self.endpoint_url,
                    bucket = %bucket,
                    key = %key,
                    size_bytes = size,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "S3 upload failed"
                );
                err
            })?;

        tracing::info!(
            bucket = %bucket,
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 upload successful"
        );

        Ok(())
    }
}
