use crate::shared::config::optional;

/// Addresses used for contact-form mail. Missing recipient is reported per
/// request rather than at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMailConfig {
    pub from: String,
    pub recipient: Option<String>,
}

impl ContactMailConfig {
    pub const DEFAULT_FROM: &'static str = "Portfolio <onboarding@resend.dev>";

    pub fn from_env() -> Self {
        Self {
            from: optional("EMAIL_FROM").unwrap_or_else(|| Self::DEFAULT_FROM.to_string()),
            recipient: optional("RESEND_TO_EMAIL").or_else(|| optional("CONTACT_TO_EMAIL")),
        }
    }
}
