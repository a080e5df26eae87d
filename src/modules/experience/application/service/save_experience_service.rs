use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::experience::application::domain::{ExperienceSection, EXPERIENCE_PAGE};
use crate::experience::application::ports::incoming::use_cases::{
    SaveExperienceError, SaveExperienceUseCase,
};
use crate::experience::application::ports::outgoing::ExperienceRepository;
use crate::revalidation::application::ports::incoming::use_cases::RevalidatePagesUseCase;
use crate::shared::list_ids::validate_list_ids;

pub struct SaveExperienceService<R>
where
    R: ExperienceRepository,
{
    repository: R,
    revalidator: Arc<dyn RevalidatePagesUseCase + Send + Sync>,
}

impl<R> SaveExperienceService<R>
where
    R: ExperienceRepository,
{
    pub fn new(repository: R, revalidator: Arc<dyn RevalidatePagesUseCase + Send + Sync>) -> Self {
        Self {
            repository,
            revalidator,
        }
    }
}

#[async_trait]
impl<R> SaveExperienceUseCase for SaveExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(&self, section: ExperienceSection) -> Result<(), SaveExperienceError> {
        validate_list_ids(section.experiences.iter().map(|e| e.id.as_str())).map_err(|e| {
            warn!(error = %e, "Rejected experience list");
            SaveExperienceError::ValidationError(e.to_string())
        })?;

        self.repository
            .replace_section(&section)
            .await
            .map_err(|e| SaveExperienceError::RepositoryError(e.to_string()))?;

        info!(items = section.experiences.len(), "Experience section replaced");

        self.revalidator
            .execute(EXPERIENCE_PAGE)
            .await
            .map_err(|e| SaveExperienceError::RevalidationFailed(e.to_string()))?;

        Ok(())
    }
}
