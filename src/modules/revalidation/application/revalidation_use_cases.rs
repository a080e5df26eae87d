use std::sync::Arc;

use crate::revalidation::application::ports::incoming::use_cases::RevalidatePagesUseCase;

#[derive(Clone)]
pub struct RevalidationUseCases {
    pub revalidate: Arc<dyn RevalidatePagesUseCase + Send + Sync>,
}
