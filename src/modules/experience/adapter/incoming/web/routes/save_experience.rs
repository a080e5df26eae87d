use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::experience::application::domain::ExperienceSection;
use crate::experience::application::ports::incoming::use_cases::SaveExperienceError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::{error, info};

/// Replace the experience page
///
/// The submitted list becomes the complete set of items; anything not in it
/// is removed.
#[utoipa::path(
    post,
    path = "/api/admin/experience",
    tag = "experience",
    security(("admin_cookie" = [])),
    request_body = ExperienceSection,
    responses(
        (status = 200, description = "Saved and revalidated", body = MessageResponse),
        (status = 400, description = "Empty or duplicate item ids", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Write or revalidation failed", body = ErrorResponse),
    )
)]
#[post("/api/admin/experience")]
pub async fn save_experience_handler(
    session: AdminSession,
    req: web::Json<ExperienceSection>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.experience.save.execute(req.into_inner()).await {
        Ok(()) => {
            info!(admin = %session.username, "Experience page updated");
            ApiResponse::done("Experience updated and published")
        }
        Err(SaveExperienceError::ValidationError(ref msg)) => ApiResponse::bad_request(msg),
        Err(SaveExperienceError::RepositoryError(ref msg)) => {
            error!(error = %msg, "Failed to save experience");
            ApiResponse::internal_error_with_details("Failed to save experience", msg)
        }
        Err(SaveExperienceError::RevalidationFailed(ref msg)) => {
            error!(error = %msg, "Experience saved but revalidation failed");
            ApiResponse::internal_error_with_details("Failed to refresh pages", msg)
        }
    }
}
