use async_trait::async_trait;
use thiserror::Error;

use crate::experience::application::domain::ExperienceSection;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SaveExperienceError {
    #[error("validation error: {0}")]
    ValidationError(String),
    #[error("repository error: {0}")]
    RepositoryError(String),
    #[error("revalidation failed: {0}")]
    RevalidationFailed(String),
}

#[async_trait]
pub trait SaveExperienceUseCase: Send + Sync {
    async fn execute(&self, section: ExperienceSection) -> Result<(), SaveExperienceError>;
}
