use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::about::application::domain::{About, ABOUT_PAGE};
use crate::about::application::ports::incoming::use_cases::{SaveAboutError, SaveAboutUseCase};
use crate::about::application::ports::outgoing::AboutRepository;
use crate::revalidation::application::ports::incoming::use_cases::RevalidatePagesUseCase;

pub struct SaveAboutService<R>
where
    R: AboutRepository,
{
    repository: R,
    revalidator: Arc<dyn RevalidatePagesUseCase + Send + Sync>,
}

impl<R> SaveAboutService<R>
where
    R: AboutRepository,
{
    pub fn new(repository: R, revalidator: Arc<dyn RevalidatePagesUseCase + Send + Sync>) -> Self {
        Self {
            repository,
            revalidator,
        }
    }
}

#[async_trait]
impl<R> SaveAboutUseCase for SaveAboutService<R>
where
    R: AboutRepository + Send + Sync,
{
    async fn execute(&self, about: About) -> Result<(), SaveAboutError> {
        self.repository
            .upsert_about(&about)
            .await
            .map_err(|e| SaveAboutError::RepositoryError(e.to_string()))?;

        info!(
            education = about.education.len(),
            "About content saved"
        );

        self.revalidator
            .execute(ABOUT_PAGE)
            .await
            .map_err(|e| SaveAboutError::RevalidationFailed(e.to_string()))
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::in_memory::InMemoryAboutRepository;
    use crate::tests::support::stubs::RecordingRevalidator;

    #[tokio::test]
    async fn test_save_about_revalidates_about_page() {
        let repo = InMemoryAboutRepository::default();
        let revalidator = RecordingRevalidator::new();
        let service = SaveAboutService::new(repo.clone(), revalidator.clone());

        service.execute(About::default()).await.unwrap();

        assert_eq!(revalidator.paths(), vec!["/about"]);
        assert_eq!(repo.fetch_about().await.unwrap(), Some(About::default()));
    }
}
