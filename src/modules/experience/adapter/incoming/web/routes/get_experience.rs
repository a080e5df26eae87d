use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::experience::application::domain::ExperienceSection;
use crate::experience::application::ports::incoming::use_cases::GetExperienceError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

async fn load_experience(data: &AppState) -> HttpResponse {
    match data.experience.get.execute().await {
        Ok(section) => ApiResponse::success(section),
        Err(GetExperienceError::NotFound) => {
            ApiResponse::not_found("Experience content not found")
        }
        Err(GetExperienceError::RepositoryError(ref msg)) => {
            error!(error = %msg, "Failed to load experience");
            ApiResponse::internal_error_with_details("Failed to load experience", msg)
        }
    }
}

/// Public experience page
#[utoipa::path(
    get,
    path = "/api/experience",
    tag = "experience",
    responses(
        (status = 200, description = "Intro and items ordered by id", body = inline(SuccessResponse<ExperienceSection>)),
        (status = 404, description = "Nothing stored yet", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse),
    )
)]
#[get("/api/experience")]
pub async fn get_public_experience_handler(data: web::Data<AppState>) -> impl Responder {
    load_experience(&data).await
}

#[utoipa::path(
    get,
    path = "/api/admin/experience",
    tag = "experience",
    security(("admin_cookie" = [])),
    responses(
        (status = 200, description = "Intro and items ordered by id", body = inline(SuccessResponse<ExperienceSection>)),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Nothing stored yet", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse),
    )
)]
#[get("/api/admin/experience")]
pub async fn get_admin_experience_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    load_experience(&data).await
}
