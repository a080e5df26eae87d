pub mod get_about;
pub mod save_about;

pub use get_about::{get_admin_about_handler, get_public_about_handler, __path_get_admin_about_handler, __path_get_public_about_handler};
pub use save_about::{save_about_handler, __path_save_about_handler};
