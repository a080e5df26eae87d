use async_trait::async_trait;
use thiserror::Error;

use crate::experience::application::domain::ExperienceSection;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GetExperienceError {
    #[error("experience content not found")]
    NotFound,
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetExperienceUseCase: Send + Sync {
    async fn execute(&self) -> Result<ExperienceSection, GetExperienceError>;
}
