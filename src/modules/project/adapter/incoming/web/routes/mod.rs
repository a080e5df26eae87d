pub mod get_projects;
pub mod get_single_project;
pub mod save_projects;

pub use get_projects::{get_admin_projects_handler, get_public_projects_handler, __path_get_admin_projects_handler, __path_get_public_projects_handler};
pub use get_single_project::{get_single_project_handler, __path_get_single_project_handler};
pub use save_projects::{save_projects_handler, __path_save_projects_handler};
