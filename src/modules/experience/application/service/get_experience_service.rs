use async_trait::async_trait;

use crate::experience::application::domain::ExperienceSection;
use crate::experience::application::ports::incoming::use_cases::{
    GetExperienceError, GetExperienceUseCase,
};
use crate::experience::application::ports::outgoing::ExperienceRepository;

pub struct GetExperienceService<R>
where
    R: ExperienceRepository,
{
    repository: R,
}

impl<R> GetExperienceService<R>
where
    R: ExperienceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetExperienceUseCase for GetExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(&self) -> Result<ExperienceSection, GetExperienceError> {
        self.repository
            .fetch_section()
            .await
            .map_err(|e| GetExperienceError::RepositoryError(e.to_string()))?
            .ok_or(GetExperienceError::NotFound)
    }
}
