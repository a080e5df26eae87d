pub mod entities;

pub use entities::{About, AboutRecord, Education, PersonalInfo, Skills, ABOUT_PAGE};
