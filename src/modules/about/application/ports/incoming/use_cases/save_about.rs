use async_trait::async_trait;
use thiserror::Error;

use crate::about::application::domain::About;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SaveAboutError {
    #[error("repository error: {0}")]
    RepositoryError(String),
    #[error("revalidation failed: {0}")]
    RevalidationFailed(String),
}

#[async_trait]
pub trait SaveAboutUseCase: Send + Sync {
    async fn execute(&self, about: About) -> Result<(), SaveAboutError>;
}
