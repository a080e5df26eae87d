use std::sync::Arc;

use crate::contact::application::ports::incoming::use_cases::{
    GetContactUseCase, SaveContactUseCase,
};

#[derive(Clone)]
pub struct ContactUseCases {
    pub get: Arc<dyn GetContactUseCase + Send + Sync>,
    pub save: Arc<dyn SaveContactUseCase + Send + Sync>,
}
