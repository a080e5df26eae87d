use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::contact::application::domain::Contact;
use crate::contact::application::ports::incoming::use_cases::GetContactError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::http::header;
use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

/// Edge caches may serve the public contact block for an hour and keep
/// serving it stale for a day while refetching.
pub const PUBLIC_CONTACT_CACHE_CONTROL: &str =
    "public, s-maxage=3600, stale-while-revalidate=86400";

fn contact_read_failure(e: GetContactError) -> HttpResponse {
    match e {
        GetContactError::NotFound => ApiResponse::not_found("Contact info not found"),
        GetContactError::RepositoryError(msg) => {
            error!(error = %msg, "Failed to load contact info");
            ApiResponse::internal_error_with_details("Failed to load contact info", &msg)
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/contact",
    tag = "contact",
    responses(
        (status = 200, description = "Contact info, cacheable at the edge", body = inline(SuccessResponse<Contact>)),
        (status = 404, description = "Nothing stored yet", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse),
    )
)]
#[get("/api/contact")]
pub async fn get_public_contact_handler(data: web::Data<AppState>) -> impl Responder {
    match data.contact.get.execute().await {
        Ok(contact) => HttpResponse::Ok()
            .insert_header((header::CACHE_CONTROL, PUBLIC_CONTACT_CACHE_CONTROL))
            .json(ApiResponse::body(contact)),
        Err(e) => contact_read_failure(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/contact",
    tag = "contact",
    security(("admin_cookie" = [])),
    responses(
        (status = 200, description = "Contact info", body = inline(SuccessResponse<Contact>)),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Nothing stored yet", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse),
    )
)]
#[get("/api/admin/contact")]
pub async fn get_admin_contact_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.get.execute().await {
        Ok(contact) => ApiResponse::success(contact),
        Err(e) => contact_read_failure(e),
    }
}
