pub mod get_projects_service;
pub mod get_single_project_service;
pub mod save_projects_service;

pub use get_projects_service::GetProjectsService;
pub use get_single_project_service::GetSingleProjectService;
pub use save_projects_service::SaveProjectsService;
