pub mod get_about_service;
pub mod save_about_service;

pub use get_about_service::GetAboutService;
pub use save_about_service::SaveAboutService;
