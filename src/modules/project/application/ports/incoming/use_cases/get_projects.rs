use async_trait::async_trait;
use thiserror::Error;

use crate::project::application::domain::Project;
use crate::shared::audience::Audience;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GetProjectsError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    /// Ordered by id. An empty table yields an empty list.
    async fn execute(&self, audience: Audience) -> Result<Vec<Project>, GetProjectsError>;
}
