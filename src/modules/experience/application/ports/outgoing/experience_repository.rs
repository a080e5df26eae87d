use async_trait::async_trait;
use thiserror::Error;

use crate::experience::application::domain::ExperienceSection;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExperienceRepositoryError {
    #[error("database error: {0}")]
    DatabaseError(String),
    #[error("serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    /// `None` when the description row has never been written.
    async fn fetch_section(&self) -> Result<Option<ExperienceSection>, ExperienceRepositoryError>;

    /// Upserts the description and swaps the whole item list atomically.
    async fn replace_section(
        &self,
        section: &ExperienceSection,
    ) -> Result<(), ExperienceRepositoryError>;
}
