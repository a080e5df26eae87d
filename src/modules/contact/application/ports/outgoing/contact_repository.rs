use async_trait::async_trait;
use thiserror::Error;

use crate::contact::application::domain::Contact;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContactRepositoryError {
    #[error("database error: {0}")]
    DatabaseError(String),
    #[error("serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn fetch_contact(&self) -> Result<Option<Contact>, ContactRepositoryError>;

    async fn upsert_contact(&self, contact: &Contact) -> Result<(), ContactRepositoryError>;
}
