use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::project::application::domain::{Project, PROJECTS_PAGE};
use crate::project::application::ports::incoming::use_cases::{
    SaveProjectsError, SaveProjectsUseCase,
};
use crate::project::application::ports::outgoing::ProjectRepository;
use crate::revalidation::application::ports::incoming::use_cases::RevalidatePagesUseCase;
use crate::shared::list_ids::validate_list_ids;

pub struct SaveProjectsService<R>
where
    R: ProjectRepository,
{
    repository: R,
    revalidator: Arc<dyn RevalidatePagesUseCase + Send + Sync>,
}

impl<R> SaveProjectsService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R, revalidator: Arc<dyn RevalidatePagesUseCase + Send + Sync>) -> Self {
        Self {
            repository,
            revalidator,
        }
    }
}

#[async_trait]
impl<R> SaveProjectsUseCase for SaveProjectsService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, projects: Vec<Project>) -> Result<(), SaveProjectsError> {
        validate_list_ids(projects.iter().map(|p| p.id.as_str())).map_err(|e| {
            warn!(error = %e, "Rejected project list");
            SaveProjectsError::ValidationError(e.to_string())
        })?;

        self.repository
            .replace_all(&projects)
            .await
            .map_err(|e| SaveProjectsError::RepositoryError(e.to_string()))?;

        info!(count = projects.len(), "Projects replaced");

        self.revalidator
            .execute(PROJECTS_PAGE)
            .await
            .map_err(|e| SaveProjectsError::RevalidationFailed(e.to_string()))?;

        Ok(())
    }
}
