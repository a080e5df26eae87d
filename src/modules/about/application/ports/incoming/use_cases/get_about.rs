use async_trait::async_trait;
use thiserror::Error;

use crate::about::application::domain::About;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GetAboutError {
    #[error("about content not found")]
    NotFound,
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetAboutUseCase: Send + Sync {
    async fn execute(&self) -> Result<About, GetAboutError>;
}
