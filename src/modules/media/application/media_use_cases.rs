use std::sync::Arc;

use crate::media::application::domain::UploadPolicy;
use crate::media::application::ports::incoming::use_cases::UploadFileUseCase;

#[derive(Clone)]
pub struct MediaUseCases {
    pub upload: Arc<dyn UploadFileUseCase + Send + Sync>,
    /// Read by the multipart handler to stop buffering oversized bodies early.
    pub policy: UploadPolicy,
}
