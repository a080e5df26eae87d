use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::contact::application::domain::{Contact, CONTACT_PAGE};
use crate::contact::application::ports::incoming::use_cases::{
    SaveContactError, SaveContactUseCase,
};
use crate::contact::application::ports::outgoing::ContactRepository;
use crate::revalidation::application::ports::incoming::use_cases::RevalidatePagesUseCase;

pub struct SaveContactService<R>
where
    R: ContactRepository,
{
    repository: R,
    revalidator: Arc<dyn RevalidatePagesUseCase + Send + Sync>,
}

impl<R> SaveContactService<R>
where
    R: ContactRepository,
{
    pub fn new(repository: R, revalidator: Arc<dyn RevalidatePagesUseCase + Send + Sync>) -> Self {
        Self {
            repository,
            revalidator,
        }
    }
}

#[async_trait]
impl<R> SaveContactUseCase for SaveContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(&self, contact: Contact) -> Result<(), SaveContactError> {
        self.repository
            .upsert_contact(&contact)
            .await
            .map_err(|e| SaveContactError::RepositoryError(e.to_string()))?;

        info!("Contact info saved");

        self.revalidator
            .execute(CONTACT_PAGE)
            .await
            .map_err(|e| SaveContactError::RevalidationFailed(e.to_string()))
            .map(|_| ())
    }
}
