pub mod about;
pub mod auth;
pub mod contact;
pub mod experience;
pub mod mail;
pub mod media;
pub mod profile;
pub mod project;
pub mod revalidation;
