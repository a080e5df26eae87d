pub mod get_contact;
pub mod save_contact;

pub use get_contact::{get_admin_contact_handler, get_public_contact_handler, __path_get_admin_contact_handler, __path_get_public_contact_handler};
pub use save_contact::{save_contact_handler, __path_save_contact_handler};
