pub mod entities;

pub use entities::{Project, ProjectList, PROJECTS_PAGE};
