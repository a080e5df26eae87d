use std::sync::Arc;

use crate::mail::application::ports::incoming::use_cases::SendContactMessageUseCase;

#[derive(Clone)]
pub struct MailUseCases {
    pub send_contact_message: Arc<dyn SendContactMessageUseCase + Send + Sync>,
}
