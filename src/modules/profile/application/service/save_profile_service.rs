use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::profile::application::domain::{Profile, PROFILE_PAGE};
use crate::profile::application::ports::incoming::use_cases::{
    SaveProfileError, SaveProfileUseCase,
};
use crate::profile::application::ports::outgoing::ProfileRepository;
use crate::revalidation::application::ports::incoming::use_cases::RevalidatePagesUseCase;

pub struct SaveProfileService<R>
where
    R: ProfileRepository,
{
    repository: R,
    revalidator: Arc<dyn RevalidatePagesUseCase + Send + Sync>,
}

impl<R> SaveProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: R, revalidator: Arc<dyn RevalidatePagesUseCase + Send + Sync>) -> Self {
        Self {
            repository,
            revalidator,
        }
    }
}

#[async_trait]
impl<R> SaveProfileUseCase for SaveProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self, profile: Profile) -> Result<(), SaveProfileError> {
        self.repository
            .upsert_profile(&profile)
            .await
            .map_err(|e| SaveProfileError::RepositoryError(e.to_string()))?;

        info!(title = %profile.title, "Profile saved");

        self.revalidator
            .execute(PROFILE_PAGE)
            .await
            .map_err(|e| SaveProfileError::RevalidationFailed(e.to_string()))?;

        Ok(())
    }
}
