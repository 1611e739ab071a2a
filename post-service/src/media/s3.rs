/// S3-backed media store
use async_trait::async_trait;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

use super::MediaStore;
use crate::config::MediaConfig;
use crate::error::{AppError, Result};

/// Build an AWS S3 client from the media configuration.
///
/// Credentials come from the default provider chain (env vars, instance
/// profile); a custom endpoint supports minio/localstack in development.
pub async fn build_s3_client(config: &MediaConfig) -> Client {
    let shared_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .load()
        .await;

    let mut builder = aws_sdk_s3::config::Builder::from(&shared_config);
    if let Some(endpoint) = &config.endpoint {
        builder = builder.endpoint_url(endpoint).force_path_style(true);
    }

    Client::from_conf(builder.build())
}

pub struct S3MediaStore {
    client: Client,
    bucket: String,
}

impl S3MediaStore {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl MediaStore for S3MediaStore {
    async fn upload(&self, key: &str, content_type: &str, data: Vec<u8>) -> Result<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|e| AppError::MediaStore(format!("upload of {key} failed: {e}")))?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        match self
            .client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(e) => {
                tracing::warn!(key, "media delete failed: {e}");
                Ok(false)
            }
        }
    }
}
