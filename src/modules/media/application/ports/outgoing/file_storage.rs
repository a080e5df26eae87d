use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub bucket: String,
    pub name: String,
    pub content_type: String,
    pub cache_control_secs: u32,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FileStorageError {
    /// The storage service answered with an error; the message is passed through.
    #[error("{0}")]
    Rejected(String),
    #[error("storage unreachable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait FileStorage: Send + Sync {
    async fn put(&self, object: StoredObject) -> Result<(), FileStorageError>;

    fn public_url(&self, bucket: &str, name: &str) -> String;
}
