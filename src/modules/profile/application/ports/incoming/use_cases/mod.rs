pub mod get_profile;
pub mod save_profile;

pub use get_profile::{GetProfileError, GetProfileUseCase};
pub use save_profile::{SaveProfileError, SaveProfileUseCase};
