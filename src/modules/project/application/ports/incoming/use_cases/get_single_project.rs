use async_trait::async_trait;
use thiserror::Error;

use crate::project::application::domain::Project;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GetSingleProjectError {
    #[error("project not found")]
    NotFound,
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetSingleProjectUseCase: Send + Sync {
    async fn execute(&self, id: &str) -> Result<Project, GetSingleProjectError>;
}
