use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use uuid::Uuid;

/// An in-memory file waiting to be pushed to the object store.
#[derive(Clone, Debug)]
pub struct UploadFile {
    file_name: String,
    content_type: Option<String>,
    content: Bytes,
}

impl UploadFile {
    pub fn new(file_name: String, content_type: Option<String>, content: Bytes) -> Self {
        Self {
            file_name,
            content_type,
            content,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn content(&self) -> &Bytes {
        &self.content
    }

    pub fn size(&self) -> i64 {
        self.content.len() as i64
    }

    pub fn extension(&self) -> Option<String> {
        let (stem, extension) = self.file_name.rsplit_once('.')?;
        let extension = extension.to_lowercase();
        if stem.is_empty()
            || extension.is_empty()
            || extension.len() > 10
            || !extension.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return None;
        }
        Some(extension)
    }
}

/// Storage coordinates of a completed upload.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UploadResult {
    pub version_id: String,
    pub bucket_name: String,
    pub file_name: String,
    pub file_size: i64,
}

#[derive(Debug, Error)]
pub enum FileTransferError {
    #[error("file {0} is empty")]
    EmptyFile(String),

    #[error("object store rejected upload to bucket {bucket}: {message}")]
    UploadRejected { bucket: String, message: String },
}

#[async_trait]
pub trait FileTransferer: Send + Sync {
    async fn upload(
        &self,
        bucket_name: &str,
        path: &str,
        file: UploadFile,
    ) -> Result<UploadResult, FileTransferError>;
}

/// Builds `<path>/<uuid>.<ext>`; the original file name never reaches the store.
pub fn generate_object_key(path: &str, file: &UploadFile) -> String {
    let mut key = Uuid::now_v7().to_string();
    if let Some(extension) = file.extension() {
        key = format!("{key}.{extension}");
    }

    let prefix = path.trim_matches('/');
    if prefix.is_empty() {
        key
    } else {
        format!("{prefix}/{key}")
    }
}
