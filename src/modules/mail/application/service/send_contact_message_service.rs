use std::sync::Arc;

use async_trait::async_trait;
use email_address::EmailAddress;
use tracing::{error, info};

use crate::mail::application::domain::{ContactMailConfig, ContactMessage};
use crate::mail::application::ports::incoming::use_cases::{
    SendContactMessageError, SendContactMessageUseCase,
};
use crate::mail::application::ports::outgoing::{DeliveryReceipt, EmailSender, OutgoingEmail};

pub struct SendContactMessageService {
    /// `None` when neither Resend nor SMTP is configured.
    sender: Option<Arc<dyn EmailSender + Send + Sync>>,
    config: ContactMailConfig,
}

impl SendContactMessageService {
    pub fn new(
        sender: Option<Arc<dyn EmailSender + Send + Sync>>,
        config: ContactMailConfig,
    ) -> Self {
        Self { sender, config }
    }
}

#[async_trait]
impl SendContactMessageUseCase for SendContactMessageService {
    async fn execute(
        &self,
        message: ContactMessage,
    ) -> Result<DeliveryReceipt, SendContactMessageError> {
        if let Some(field) = message.first_missing_field() {
            return Err(SendContactMessageError::MissingField(field));
        }

        let reply_to = message.email.trim().to_string();
        if !EmailAddress::is_valid(&reply_to) {
            return Err(SendContactMessageError::InvalidReplyTo(reply_to));
        }

        let sender = self
            .sender
            .as_ref()
            .ok_or(SendContactMessageError::NotConfigured("mail provider"))?;
        let recipient = self
            .config
            .recipient
            .clone()
            .ok_or(SendContactMessageError::NotConfigured("mail recipient"))?;

        let receipt = sender
            .send(OutgoingEmail {
                from: self.config.from.clone(),
                to: recipient,
                reply_to,
                subject: message.subject_line(),
                html: message.render_html(),
            })
            .await
            .map_err(|e| {
                error!(error = %e, "Contact mail delivery failed");
                SendContactMessageError::DeliveryFailed(e.to_string())
            })?;

        info!(id = %receipt.id, "Contact mail sent");
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mail::application::ports::outgoing::EmailSenderError;
    use crate::tests::support::stubs::RecordingEmailSender;

    fn config() -> ContactMailConfig {
        ContactMailConfig {
            from: "Site <noreply@example.com>".into(),
            recipient: Some("owner@example.com".into()),
        }
    }

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Linus".into(),
            email: "linus@example.com".into(),
            subject: "Collab".into(),
            message: "<b>hi</b>".into(),
        }
    }

    #[tokio::test]
    async fn test_sends_to_owner_with_reply_to_visitor() {
        let sender = RecordingEmailSender::new();
        let service = SendContactMessageService::new(Some(sender.clone()), config());

        let receipt = service.execute(message()).await.unwrap();

        assert_eq!(receipt.id, "email-1");
        let sent = sender.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "owner@example.com");
        assert_eq!(sent[0].reply_to, "linus@example.com");
        assert_eq!(sent[0].subject, "Contact form: Collab");
        assert!(sent[0].html.contains("&lt;b&gt;hi&lt;/b&gt;"));
    }

    #[tokio::test]
    async fn test_blank_field_rejected_before_sending() {
        let sender = RecordingEmailSender::new();
        let service = SendContactMessageService::new(Some(sender.clone()), config());

        let err = service
            .execute(ContactMessage {
                name: String::new(),
                ..message()
            })
            .await
            .unwrap_err();

        assert_eq!(err, SendContactMessageError::MissingField("name"));
        assert!(sender.sent().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_reply_to() {
        let service =
            SendContactMessageService::new(Some(RecordingEmailSender::new()), config());

        let err = service
            .execute(ContactMessage {
                email: "not-an-address".into(),
                ..message()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, SendContactMessageError::InvalidReplyTo(_)));
    }

    #[tokio::test]
    async fn test_unconfigured_provider_and_recipient() {
        let service = SendContactMessageService::new(None, config());
        let err = service.execute(message()).await.unwrap_err();
        assert_eq!(err, SendContactMessageError::NotConfigured("mail provider"));

        let service = SendContactMessageService::new(
            Some(RecordingEmailSender::new()),
            ContactMailConfig {
                recipient: None,
                ..config()
            },
        );
        let err = service.execute(message()).await.unwrap_err();
        assert_eq!(err, SendContactMessageError::NotConfigured("mail recipient"));
    }

    #[tokio::test]
    async fn test_provider_message_passes_through() {
        let sender = RecordingEmailSender::failing(EmailSenderError::Rejected(
            "Domain not verified".into(),
        ));
        let service = SendContactMessageService::new(Some(sender), config());

        let err = service.execute(message()).await.unwrap_err();

        assert_eq!(
            err,
            SendContactMessageError::DeliveryFailed("Domain not verified".into())
        );
    }
}
