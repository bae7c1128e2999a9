use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::{Client, error::DisplayErrorContext, primitives::ByteStream};
use tracing::debug;

use crate::{
    config::app_config::ObjectStoreConfig,
    shared::infrastructure::storage::file_transferer::{
        FileTransferError, FileTransferer, UploadFile, UploadResult, generate_object_key,
    },
};

/// Uploads to any S3-compatible object store.
#[derive(Clone)]
pub struct S3FileTransfererImpl {
    client: Client,
}

impl S3FileTransfererImpl {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn from_config(config: &ObjectStoreConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));

        if let (Some(access_key_id), Some(secret_access_key)) =
            (&config.access_key_id, &config.secret_access_key)
        {
            loader = loader.credentials_provider(Credentials::new(
                access_key_id.clone(),
                secret_access_key.clone(),
                None,
                None,
                "hotel-reservation-api",
            ));
        }
        if let Some(endpoint_url) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url.clone());
        }

        let sdk_config = loader.load().await;
        let client = Client::from_conf(
            aws_sdk_s3::config::Builder::from(&sdk_config)
                // Self-hosted stores (MinIO, RustFS) only speak path-style.
                .force_path_style(config.endpoint_url.is_some())
                .build(),
        );

        Self::new(client)
    }
}

#[async_trait]
impl FileTransferer for S3FileTransfererImpl {
    async fn upload(
        &self,
        bucket_name: &str,
        path: &str,
        file: UploadFile,
    ) -> Result<UploadResult, FileTransferError> {
        if file.content().is_empty() {
            return Err(FileTransferError::EmptyFile(file.file_name().to_string()));
        }

        let object_key = generate_object_key(path, &file);
        let file_size = file.size();

        let output = self
            .client
            .put_object()
            .bucket(bucket_name)
            .key(&object_key)
            .set_content_type(file.content_type().map(str::to_string))
            .content_length(file_size)
            .body(ByteStream::from(file.content().clone()))
            .send()
            .await
            .map_err(|e| FileTransferError::UploadRejected {
                bucket: bucket_name.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        // Unversioned buckets return no version id; the ETag still pins the content.
        let version_id = output
            .version_id()
            .or(output.e_tag())
            .map(|value| value.trim_matches('"').to_string())
            .unwrap_or_default();

        debug!(bucket = bucket_name, object_key = %object_key, file_size, "object uploaded");

        Ok(UploadResult {
            version_id,
            bucket_name: bucket_name.to_string(),
            file_name: object_key,
            file_size,
        })
    }
}
