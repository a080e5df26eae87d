pub mod resend_sender;
pub mod smtp_sender;

pub use resend_sender::{ResendConfig, ResendEmailSender};
pub use smtp_sender::{SmtpConfig, SmtpEmailSender};
