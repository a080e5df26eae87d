pub mod get_about;
pub mod save_about;

pub use get_about::{GetAboutError, GetAboutUseCase};
pub use save_about::{SaveAboutError, SaveAboutUseCase};
