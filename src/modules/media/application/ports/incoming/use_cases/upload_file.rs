use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// One multipart upload as collected by the web adapter.
#[derive(Debug, Clone, Default)]
pub struct UploadFileCommand {
    /// Raw `type` form field; parsed by the service.
    pub kind: Option<String>,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadedFile {
    pub bucket: String,
    pub object_name: String,
    pub public_url: String,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UploadFileError {
    #[error("no file provided")]
    MissingFile,
    #[error("unknown upload type '{0}'")]
    UnknownKind(String),
    #[error("invalid file type '{content_type}', allowed: {allowed}")]
    InvalidFileType {
        content_type: String,
        allowed: String,
    },
    #[error("file is {size} bytes, limit is {max}")]
    TooLarge { size: u64, max: u64 },
    #[error("storage error: {0}")]
    StorageFailed(String),
}

#[async_trait]
pub trait UploadFileUseCase: Send + Sync {
    async fn execute(&self, command: UploadFileCommand) -> Result<UploadedFile, UploadFileError>;
}
