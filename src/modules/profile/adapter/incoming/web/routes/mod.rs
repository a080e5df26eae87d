pub mod get_admin_profile;
pub mod get_public_profile;
pub mod save_profile;

pub use get_admin_profile::{get_admin_profile_handler, __path_get_admin_profile_handler};
pub use get_public_profile::{get_public_profile_handler, __path_get_public_profile_handler};
pub use save_profile::{save_profile_handler, __path_save_profile_handler};

use actix_web::HttpResponse;
use tracing::error;

use crate::profile::application::ports::incoming::use_cases::GetProfileError;
use crate::shared::api::ApiResponse;

fn profile_read_failure(e: GetProfileError) -> HttpResponse {
    match e {
        GetProfileError::NotFound => ApiResponse::not_found("Profile not found"),
        GetProfileError::RepositoryError(msg) => {
            error!(error = %msg, "Failed to load profile");
            ApiResponse::internal_error_with_details("Failed to load profile", &msg)
        }
    }
}
