use std::sync::Arc;

use crate::about::application::ports::incoming::use_cases::{GetAboutUseCase, SaveAboutUseCase};

#[derive(Clone)]
pub struct AboutUseCases {
    pub get: Arc<dyn GetAboutUseCase + Send + Sync>,
    pub save: Arc<dyn SaveAboutUseCase + Send + Sync>,
}
