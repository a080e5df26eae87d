pub mod send_contact_message;

pub use send_contact_message::{send_contact_message_handler, __path_send_contact_message_handler};
