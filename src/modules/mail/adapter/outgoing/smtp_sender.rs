use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{
    message::header::ContentType, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::mail::application::ports::outgoing::{
    DeliveryReceipt, EmailSender, EmailSenderError, OutgoingEmail,
};
use crate::shared::config::{optional, parse_or, ConfigError};

#[derive(Clone)]
pub struct SmtpConfig {
    pub server: String,
    pub port: u16,
    /// Empty for unauthenticated local relays (Mailpit, MailHog).
    pub username: Option<String>,
    pub password: Option<String>,
}

impl SmtpConfig {
    /// `Ok(None)` when `SMTP_SERVER` is unset.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        let Some(server) = optional("SMTP_SERVER") else {
            return Ok(None);
        };

        Ok(Some(Self {
            server,
            port: parse_or("SMTP_PORT", 587)?,
            username: optional("SMTP_USERNAME"),
            password: optional("SMTP_PASSWORD"),
        }))
    }
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

pub struct SmtpEmailSender {
    mailer: Box<dyn Mailer>,
}

impl SmtpEmailSender {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>) -> Self {
        Self { mailer }
    }

    pub fn new(config: &SmtpConfig) -> Result<Self, EmailSenderError> {
        let transport = match (&config.username, &config.password) {
            (Some(user), Some(pass)) => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.server)
                    .map_err(|e| EmailSenderError::Unavailable(e.to_string()))?
                    .port(config.port)
                    .credentials(Credentials::new(user.clone(), pass.clone()))
                    .build()
            }
            // Local/test relay without TLS or auth
            _ => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.server)
                .port(config.port)
                .build(),
        };

        Ok(Self::new_with_mailer(Box::new(transport)))
    }
}

fn parse_mailbox(raw: &str) -> Result<lettre::message::Mailbox, EmailSenderError> {
    raw.parse()
        .map_err(|e| EmailSenderError::InvalidAddress(format!("{raw}: {e}")))
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send(&self, email: OutgoingEmail) -> Result<DeliveryReceipt, EmailSenderError> {
        let message = Message::builder()
            .from(parse_mailbox(&email.from)?)
            .to(parse_mailbox(&email.to)?)
            .reply_to(parse_mailbox(&email.reply_to)?)
            .subject(email.subject)
            .message_id(None)
            .header(ContentType::TEXT_HTML)
            .body(email.html)
            .map_err(|e| EmailSenderError::Rejected(e.to_string()))?;

        let id = message
            .headers()
            .get_raw("Message-ID")
            .unwrap_or_default()
            .to_string();

        self.mailer
            .send(message)
            .await
            .map_err(EmailSenderError::Rejected)?;

        Ok(DeliveryReceipt { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturingMailer {
        sent: Arc<Mutex<Vec<Message>>>,
    }

    #[async_trait]
    impl Mailer for CapturingMailer {
        async fn send(&self, email: Message) -> Result<(), String> {
            self.sent.lock().unwrap().push(email);
            Ok(())
        }
    }

    fn email() -> OutgoingEmail {
        OutgoingEmail {
            from: "Site <noreply@example.com>".into(),
            to: "owner@example.com".into(),
            reply_to: "visitor@example.com".into(),
            subject: "Contact form: Hi".into(),
            html: "<p>Hello</p>".into(),
        }
    }

    #[tokio::test]
    async fn test_send_sets_reply_to_and_returns_message_id() {
        let mailer = CapturingMailer::default();
        let sender = SmtpEmailSender::new_with_mailer(Box::new(mailer.clone()));

        let receipt = sender.send(email()).await.unwrap();

        assert!(!receipt.id.is_empty());
        let sent = mailer.sent.lock().unwrap();
        let formatted = String::from_utf8(sent[0].formatted()).unwrap();
        assert!(formatted.contains("Reply-To: visitor@example.com"));
        assert!(formatted.contains("Subject: Contact form: Hi"));
    }

    #[tokio::test]
    async fn test_invalid_recipient_never_reaches_mailer() {
        struct PanicMailer;
        #[async_trait]
        impl Mailer for PanicMailer {
            async fn send(&self, _: Message) -> Result<(), String> {
                panic!("mailer must not be called");
            }
        }

        let sender = SmtpEmailSender::new_with_mailer(Box::new(PanicMailer));

        let err = sender
            .send(OutgoingEmail {
                to: "not-an-email".into(),
                ..email()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, EmailSenderError::InvalidAddress(msg) if msg.contains("not-an-email")));
    }

    #[tokio::test]
    async fn test_transport_error_is_rejected() {
        struct DownMailer;
        #[async_trait]
        impl Mailer for DownMailer {
            async fn send(&self, _: Message) -> Result<(), String> {
                Err("connection refused".into())
            }
        }

        let sender = SmtpEmailSender::new_with_mailer(Box::new(DownMailer));

        let err = sender.send(email()).await.unwrap_err();
        assert_eq!(err, EmailSenderError::Rejected("connection refused".into()));
    }
}
