pub mod get_projects;
pub mod get_single_project;
pub mod save_projects;

pub use get_projects::{GetProjectsError, GetProjectsUseCase};
pub use get_single_project::{GetSingleProjectError, GetSingleProjectUseCase};
pub use save_projects::{SaveProjectsError, SaveProjectsUseCase};
