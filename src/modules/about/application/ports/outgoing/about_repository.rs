use async_trait::async_trait;
use thiserror::Error;

use crate::about::application::domain::About;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AboutRepositoryError {
    #[error("database error: {0}")]
    DatabaseError(String),
    #[error("serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait AboutRepository: Send + Sync {
    async fn fetch_about(&self) -> Result<Option<About>, AboutRepositoryError>;
    async fn upsert_about(&self, about: &About) -> Result<(), AboutRepositoryError>;
}
