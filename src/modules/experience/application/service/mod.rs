pub mod get_experience_service;
pub mod save_experience_service;

pub use get_experience_service::GetExperienceService;
pub use save_experience_service::SaveExperienceService;
