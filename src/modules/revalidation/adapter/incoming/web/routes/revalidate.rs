use crate::api::schemas::MessageResponse;
use crate::revalidation::application::ports::incoming::use_cases::RevalidateError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{http::StatusCode, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct RevalidateRequestDto {
    #[schema(example = "/about")]
    pub path: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct RevalidateResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = true)]
    pub revalidated: bool,
    #[schema(example = json!(["/", "/about", "/about", "/contact", "/portfolio", "/experience"]))]
    pub paths: Vec<String>,
}

/// Revalidate public pages
///
/// Marks the root layout, the root page, the given path and every section page stale.
#[utoipa::path(
    post,
    path = "/api/revalidate",
    tag = "cache",
    request_body = RevalidateRequestDto,
    responses(
        (status = 200, description = "Pages marked stale", body = RevalidateResponse),
        (status = 400, description = "Path is required", body = MessageResponse),
        (status = 500, description = "Page cache failure", body = MessageResponse),
    )
)]
#[post("/api/revalidate")]
pub async fn revalidate_handler(
    req: web::Json<RevalidateRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let path = req.into_inner().path.unwrap_or_default();

    match data.revalidation.revalidate.execute(&path).await {
        Ok(outcome) => HttpResponse::Ok().json(RevalidateResponse {
            success: true,
            revalidated: true,
            paths: outcome.paths,
        }),
        Err(RevalidateError::EmptyPath) => {
            ApiResponse::rejected(StatusCode::BAD_REQUEST, "Path is required")
        }
        Err(RevalidateError::CacheFailure(ref e)) => {
            error!(path = %path, error = %e, "Revalidation failed");
            HttpResponse::InternalServerError().json(ApiResponse::<()> {
                message: Some("Error revalidating".to_string()),
                details: Some(e.clone()),
                ..ApiResponse::bare(false)
            })
        }
    }
}
