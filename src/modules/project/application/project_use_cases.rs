use std::sync::Arc;

use crate::project::application::ports::incoming::use_cases::{
    GetProjectsUseCase, GetSingleProjectUseCase, SaveProjectsUseCase,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub get_list: Arc<dyn GetProjectsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleProjectUseCase + Send + Sync>,
    pub save: Arc<dyn SaveProjectsUseCase + Send + Sync>,
}
