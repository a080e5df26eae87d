use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub html: String,
}

/// Provider-assigned message id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeliveryReceipt {
    pub id: String,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailSenderError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    #[error("{0}")]
    Rejected(String),
    #[error("mail provider unreachable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<DeliveryReceipt, EmailSenderError>;
}
