use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::mail::application::ports::outgoing::{
    DeliveryReceipt, EmailSender, EmailSenderError, OutgoingEmail,
};
use crate::shared::config::optional;

const RESEND_API_URL: &str = "https://api.resend.com";

#[derive(Clone)]
pub struct ResendConfig {
    pub api_key: String,
    pub base_url: String,
}

impl ResendConfig {
    /// `None` when `RESEND_API_KEY` is unset.
    pub fn from_env() -> Option<Self> {
        optional("RESEND_API_KEY").map(|api_key| Self {
            api_key,
            base_url: optional("RESEND_API_URL").unwrap_or_else(|| RESEND_API_URL.to_string()),
        })
    }
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    reply_to: &'a str,
    subject: &'a str,
    html: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ResendErrorBody {
    message: String,
}

pub struct ResendEmailSender {
    http: Client,
    config: ResendConfig,
}

impl ResendEmailSender {
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

    pub fn new(config: ResendConfig) -> Result<Self, EmailSenderError> {
        let http = Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .build()
            .map_err(|e| EmailSenderError::Unavailable(e.to_string()))?;

        Ok(Self { http, config })
    }

    fn endpoint(&self) -> String {
        format!("{}/emails", self.config.base_url.trim_end_matches('/'))
    }
}

fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<ResendErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| format!("HTTP {status}: {body}"))
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn send(&self, email: OutgoingEmail) -> Result<DeliveryReceipt, EmailSenderError> {
        let payload = SendEmailRequest {
            from: &email.from,
            to: [&email.to],
            reply_to: &email.reply_to,
            subject: &email.subject,
            html: &email.html,
        };

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| EmailSenderError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EmailSenderError::Rejected(error_message(status, &body)));
        }

        let sent: SendEmailResponse = response
            .json()
            .await
            .map_err(|e| EmailSenderError::Rejected(e.to_string()))?;

        Ok(DeliveryReceipt { id: sent.id })
    }
}
