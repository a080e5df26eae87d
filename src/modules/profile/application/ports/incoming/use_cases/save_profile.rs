use async_trait::async_trait;
use thiserror::Error;

use crate::profile::application::domain::Profile;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SaveProfileError {
    #[error("repository error: {0}")]
    RepositoryError(String),
    #[error("revalidation failed: {0}")]
    RevalidationFailed(String),
}

#[async_trait]
pub trait SaveProfileUseCase: Send + Sync {
    async fn execute(&self, profile: Profile) -> Result<(), SaveProfileError>;
}
