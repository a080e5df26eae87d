use std::sync::Arc;

use crate::experience::application::ports::incoming::use_cases::{
    GetExperienceUseCase, SaveExperienceUseCase,
};

#[derive(Clone)]
pub struct ExperienceUseCases {
    pub get: Arc<dyn GetExperienceUseCase + Send + Sync>,
    pub save: Arc<dyn SaveExperienceUseCase + Send + Sync>,
}
