use async_trait::async_trait;
use thiserror::Error;

use crate::project::application::domain::Project;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectRepositoryError {
    #[error("database error: {0}")]
    DatabaseError(String),
    #[error("serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Project>, ProjectRepositoryError>;

    async fn fetch_by_id(&self, id: &str) -> Result<Option<Project>, ProjectRepositoryError>;

    /// Afterwards the table holds exactly `projects`.
    async fn replace_all(&self, projects: &[Project]) -> Result<(), ProjectRepositoryError>;
}
