pub mod contact_message;
pub mod mail_config;

pub use contact_message::ContactMessage;
pub use mail_config::ContactMailConfig;
