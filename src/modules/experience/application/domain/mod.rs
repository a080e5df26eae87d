pub mod entities;

pub use entities::{ExperienceItem, ExperienceSection, EXPERIENCE_PAGE};
