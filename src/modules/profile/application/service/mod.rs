pub mod get_profile_service;
pub mod save_profile_service;

pub use get_profile_service::GetProfileService;
pub use save_profile_service::SaveProfileService;
