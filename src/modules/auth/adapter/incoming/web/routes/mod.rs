pub mod login_admin;

pub use login_admin::{login_admin_handler, LoginRequestDto, __path_login_admin_handler};
