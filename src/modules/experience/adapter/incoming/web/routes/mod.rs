pub mod get_experience;
pub mod save_experience;

pub use get_experience::{get_admin_experience_handler, get_public_experience_handler, __path_get_admin_experience_handler, __path_get_public_experience_handler};
pub use save_experience::{save_experience_handler, __path_save_experience_handler};
