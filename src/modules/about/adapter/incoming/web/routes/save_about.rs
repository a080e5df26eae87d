use crate::about::application::domain::About;
use crate::about::application::ports::incoming::use_cases::SaveAboutError;
use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::{error, info};

/// Update about page
///
/// Personal info is stored as columns; skills and education as JSON.
#[utoipa::path(
    post,
    path = "/api/admin/about",
    tag = "about",
    security(("admin_cookie" = [])),
    request_body = About,
    responses(
        (status = 200, description = "Saved and revalidated", body = MessageResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Write or revalidation failed", body = ErrorResponse),
    )
)]
#[post("/api/admin/about")]
pub async fn save_about_handler(
    session: AdminSession,
    req: web::Json<About>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.about.save.execute(req.into_inner()).await {
        Ok(()) => {
            info!(admin = %session.username, "About page updated");
            ApiResponse::done("About page updated and published")
        }
        Err(SaveAboutError::RepositoryError(ref msg)) => {
            error!(error = %msg, "Failed to save about content");
            ApiResponse::internal_error_with_details("Failed to save about content", msg)
        }
        Err(SaveAboutError::RevalidationFailed(ref msg)) => {
            error!(error = %msg, "About saved but revalidation failed");
            ApiResponse::internal_error_with_details("Failed to refresh pages", msg)
        }
    }
}
