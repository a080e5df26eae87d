pub mod get_contact;
pub mod save_contact;

pub use get_contact::{GetContactError, GetContactUseCase};
pub use save_contact::{SaveContactError, SaveContactUseCase};
