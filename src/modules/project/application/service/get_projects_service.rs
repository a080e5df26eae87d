use async_trait::async_trait;

use crate::project::application::domain::Project;
use crate::project::application::ports::incoming::use_cases::{
    GetProjectsError, GetProjectsUseCase,
};
use crate::project::application::ports::outgoing::ProjectRepository;
use crate::shared::audience::Audience;

pub struct GetProjectsService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> GetProjectsService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetProjectsUseCase for GetProjectsService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, audience: Audience) -> Result<Vec<Project>, GetProjectsError> {
        let projects = self
            .repository
            .fetch_all()
            .await
            .map_err(|e| GetProjectsError::RepositoryError(e.to_string()))?;

        Ok(match audience {
            Audience::Public => projects
                .into_iter()
                .map(Project::with_gallery_fallback)
                .collect(),
            Audience::Admin => projects,
        })
    }
}
