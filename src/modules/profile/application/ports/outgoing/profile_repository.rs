use async_trait::async_trait;
use thiserror::Error;

use crate::profile::application::domain::Profile;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProfileRepositoryError {
    #[error("database error: {0}")]
    DatabaseError(String),
    #[error("serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn fetch_profile(&self) -> Result<Option<Profile>, ProfileRepositoryError>;

    /// Insert or overwrite the singleton row.
    async fn upsert_profile(&self, profile: &Profile) -> Result<(), ProfileRepositoryError>;
}
