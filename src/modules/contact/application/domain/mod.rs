pub mod entities;

pub use entities::{Contact, CONTACT_PAGE};
