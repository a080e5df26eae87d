use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::project::application::domain::ProjectList;
use crate::project::application::ports::incoming::use_cases::SaveProjectsError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::{error, info};

/// Replace all projects
#[utoipa::path(
    post,
    path = "/api/admin/projects",
    tag = "projects",
    security(("admin_cookie" = [])),
    request_body = ProjectList,
    responses(
        (status = 200, description = "Saved and revalidated", body = MessageResponse),
        (status = 400, description = "Empty or duplicate ids", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Write or revalidation failed", body = ErrorResponse),
    )
)]
#[post("/api/admin/projects")]
pub async fn save_projects_handler(
    session: AdminSession,
    req: web::Json<ProjectList>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ProjectList { projects } = req.into_inner();

    match data.project.save.execute(projects).await {
        Ok(()) => {
            info!(admin = %session.username, "Projects updated");
            ApiResponse::done("Projects updated and published")
        }
        Err(SaveProjectsError::ValidationError(ref msg)) => ApiResponse::bad_request(msg),
        Err(SaveProjectsError::RepositoryError(ref msg)) => {
            error!(error = %msg, "Failed to save projects");
            ApiResponse::internal_error_with_details("Failed to save projects", msg)
        }
        Err(SaveProjectsError::RevalidationFailed(ref msg)) => {
            error!(error = %msg, "Projects saved but revalidation failed");
            ApiResponse::internal_error_with_details("Failed to refresh pages", msg)
        }
    }
}
