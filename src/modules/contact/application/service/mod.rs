pub mod get_contact_service;
pub mod save_contact_service;

pub use get_contact_service::GetContactService;
pub use save_contact_service::SaveContactService;
