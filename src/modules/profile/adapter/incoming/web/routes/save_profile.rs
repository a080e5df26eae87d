use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::profile::application::domain::Profile;
use crate::profile::application::ports::incoming::use_cases::SaveProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::{error, info};

/// Update profile
///
/// Overwrites the singleton profile and revalidates the home page.
#[utoipa::path(
    post,
    path = "/api/admin/profile",
    tag = "profile",
    security(("admin_cookie" = [])),
    request_body = Profile,
    responses(
        (status = 200, description = "Saved and revalidated", body = MessageResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Write or revalidation failed", body = ErrorResponse),
    )
)]
#[post("/api/admin/profile")]
pub async fn save_profile_handler(
    session: AdminSession,
    req: web::Json<Profile>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile.save.execute(req.into_inner()).await {
        Ok(()) => {
            info!(admin = %session.username, "Profile updated");
            ApiResponse::done("Profile updated and published")
        }
        Err(SaveProfileError::RepositoryError(ref msg)) => {
            error!(error = %msg, "Failed to save profile");
            ApiResponse::internal_error_with_details("Failed to save profile", msg)
        }
        Err(SaveProfileError::RevalidationFailed(ref msg)) => {
            error!(error = %msg, "Profile saved but revalidation failed");
            ApiResponse::internal_error_with_details("Failed to refresh pages", msg)
        }
    }
}
