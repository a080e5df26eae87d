use async_trait::async_trait;
use thiserror::Error;

use crate::mail::application::domain::ContactMessage;
use crate::mail::application::ports::outgoing::DeliveryReceipt;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SendContactMessageError {
    #[error("field '{0}' is required")]
    MissingField(&'static str),
    #[error("invalid email address '{0}'")]
    InvalidReplyTo(String),
    #[error("{0} is not configured")]
    NotConfigured(&'static str),
    #[error("{0}")]
    DeliveryFailed(String),
}

#[async_trait]
pub trait SendContactMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        message: ContactMessage,
    ) -> Result<DeliveryReceipt, SendContactMessageError>;
}
