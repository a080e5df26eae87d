use async_trait::async_trait;
use thiserror::Error;

use crate::contact::application::domain::Contact;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GetContactError {
    #[error("contact info not found")]
    NotFound,
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetContactUseCase: Send + Sync {
    async fn execute(&self) -> Result<Contact, GetContactError>;
}
