pub mod email_sender;

pub use email_sender::{DeliveryReceipt, EmailSender, EmailSenderError, OutgoingEmail};
