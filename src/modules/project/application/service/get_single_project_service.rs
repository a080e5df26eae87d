use async_trait::async_trait;

use crate::project::application::domain::Project;
use crate::project::application::ports::incoming::use_cases::{
    GetSingleProjectError, GetSingleProjectUseCase,
};
use crate::project::application::ports::outgoing::ProjectRepository;

/// Public detail page lookup by the caller-assigned id.
pub struct GetSingleProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> GetSingleProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetSingleProjectUseCase for GetSingleProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, id: &str) -> Result<Project, GetSingleProjectError> {
        self.repository
            .fetch_by_id(id)
            .await
            .map_err(|e| GetSingleProjectError::RepositoryError(e.to_string()))?
            .map(Project::with_gallery_fallback)
            .ok_or(GetSingleProjectError::NotFound)
    }
}
