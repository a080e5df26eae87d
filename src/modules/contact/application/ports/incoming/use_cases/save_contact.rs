use async_trait::async_trait;
use thiserror::Error;

use crate::contact::application::domain::Contact;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SaveContactError {
    #[error("repository error: {0}")]
    RepositoryError(String),
    #[error("revalidation failed: {0}")]
    RevalidationFailed(String),
}

#[async_trait]
pub trait SaveContactUseCase: Send + Sync {
    async fn execute(&self, contact: Contact) -> Result<(), SaveContactError>;
}
