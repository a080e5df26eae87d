use async_trait::async_trait;

use crate::about::application::domain::About;
use crate::about::application::ports::incoming::use_cases::{GetAboutError, GetAboutUseCase};
use crate::about::application::ports::outgoing::AboutRepository;

pub struct GetAboutService<R>
where
    R: AboutRepository,
{
    repository: R,
}

impl<R> GetAboutService<R>
where
    R: AboutRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetAboutUseCase for GetAboutService<R>
where
    R: AboutRepository + Send + Sync,
{
    async fn execute(&self) -> Result<About, GetAboutError> {
        self.repository
            .fetch_about()
            .await
            .map_err(|e| GetAboutError::RepositoryError(e.to_string()))?
            .ok_or(GetAboutError::NotFound)
    }
}
