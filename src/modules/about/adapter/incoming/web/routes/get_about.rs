use crate::about::application::domain::About;
use crate::about::application::ports::incoming::use_cases::GetAboutError;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

async fn load_about(data: &AppState) -> HttpResponse {
    match data.about.get.execute().await {
        Ok(about) => ApiResponse::success(about),
        Err(GetAboutError::NotFound) => ApiResponse::not_found("About content not found"),
        Err(GetAboutError::RepositoryError(ref msg)) => {
            error!(error = %msg, "Failed to load about content");
            ApiResponse::internal_error_with_details("Failed to load about content", msg)
        }
    }
}

/// Public about page content
#[utoipa::path(
    get,
    path = "/api/about",
    tag = "about",
    responses(
        (status = 200, description = "About content", body = inline(SuccessResponse<About>)),
        (status = 404, description = "Nothing stored yet", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse),
    )
)]
#[get("/api/about")]
pub async fn get_public_about_handler(data: web::Data<AppState>) -> impl Responder {
    load_about(&data).await
}

/// Admin about page content
#[utoipa::path(
    get,
    path = "/api/admin/about",
    tag = "about",
    security(("admin_cookie" = [])),
    responses(
        (status = 200, description = "About content", body = inline(SuccessResponse<About>)),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Nothing stored yet", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse),
    )
)]
#[get("/api/admin/about")]
pub async fn get_admin_about_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    load_about(&data).await
}
