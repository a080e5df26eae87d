use async_trait::async_trait;

use crate::contact::application::domain::Contact;
use crate::contact::application::ports::incoming::use_cases::{
    GetContactError, GetContactUseCase,
};
use crate::contact::application::ports::outgoing::ContactRepository;

pub struct GetContactService<R>
where
    R: ContactRepository,
{
    repository: R,
}

impl<R> GetContactService<R>
where
    R: ContactRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetContactUseCase for GetContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Contact, GetContactError> {
        self.repository
            .fetch_contact()
            .await
            .map_err(|e| GetContactError::RepositoryError(e.to_string()))?
            .ok_or(GetContactError::NotFound)
    }
}
