use async_trait::async_trait;

use crate::profile::application::domain::Profile;
use crate::profile::application::ports::incoming::use_cases::{
    GetProfileError, GetProfileUseCase,
};
use crate::profile::application::ports::outgoing::ProfileRepository;
use crate::shared::audience::Audience;

pub struct GetProfileService<R>
where
    R: ProfileRepository,
{
    repository: R,
}

impl<R> GetProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetProfileUseCase for GetProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self, audience: Audience) -> Result<Profile, GetProfileError> {
        let profile = self
            .repository
            .fetch_profile()
            .await
            .map_err(|e| GetProfileError::RepositoryError(e.to_string()))?
            .ok_or(GetProfileError::NotFound)?;

        Ok(match audience {
            Audience::Public => profile.with_display_urls(),
            Audience::Admin => profile,
        })
    }
}
