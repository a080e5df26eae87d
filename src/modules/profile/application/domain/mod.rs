pub mod entities;

pub use entities::{format_url, Profile, PROFILE_PAGE};
