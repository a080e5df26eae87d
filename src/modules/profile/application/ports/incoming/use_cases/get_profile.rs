use async_trait::async_trait;
use thiserror::Error;

use crate::profile::application::domain::Profile;
use crate::shared::audience::Audience;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GetProfileError {
    #[error("profile not found")]
    NotFound,
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    async fn execute(&self, audience: Audience) -> Result<Profile, GetProfileError>;
}
