use async_trait::async_trait;
use thiserror::Error;

use crate::project::application::domain::Project;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SaveProjectsError {
    #[error("validation error: {0}")]
    ValidationError(String),
    #[error("repository error: {0}")]
    RepositoryError(String),
    #[error("revalidation failed: {0}")]
    RevalidationFailed(String),
}

#[async_trait]
pub trait SaveProjectsUseCase: Send + Sync {
    async fn execute(&self, projects: Vec<Project>) -> Result<(), SaveProjectsError>;
}
