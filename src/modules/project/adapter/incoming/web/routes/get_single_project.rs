use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::project::application::domain::Project;
use crate::project::application::ports::incoming::use_cases::GetSingleProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "projects",
    params(("id" = String, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project", body = inline(SuccessResponse<Project>)),
        (status = 404, description = "No project with that id", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse),
    )
)]
#[get("/api/projects/{id}")]
pub async fn get_single_project_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.project.get_single.execute(&id).await {
        Ok(project) => ApiResponse::success(project),
        Err(GetSingleProjectError::NotFound) => ApiResponse::not_found("Project not found"),
        Err(GetSingleProjectError::RepositoryError(ref msg)) => {
            error!(project_id = %id, error = %msg, "Failed to load project");
            ApiResponse::internal_error_with_details("Failed to load project", msg)
        }
    }
}
