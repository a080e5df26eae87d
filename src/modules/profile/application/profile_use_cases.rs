use std::sync::Arc;

use crate::profile::application::ports::incoming::use_cases::{
    GetProfileUseCase, SaveProfileUseCase,
};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub get: Arc<dyn GetProfileUseCase + Send + Sync>,
    pub save: Arc<dyn SaveProfileUseCase + Send + Sync>,
}
