pub mod get_experience;
pub mod save_experience;

pub use get_experience::{GetExperienceError, GetExperienceUseCase};
pub use save_experience::{SaveExperienceError, SaveExperienceUseCase};
