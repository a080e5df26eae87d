use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::contact::application::domain::Contact;
use crate::contact::application::ports::incoming::use_cases::SaveContactError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::{error, info};

#[utoipa::path(
    post,
    path = "/api/admin/contact",
    tag = "contact",
    security(("admin_cookie" = [])),
    request_body = Contact,
    responses(
        (status = 200, description = "Saved and revalidated", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Write or revalidation failed", body = ErrorResponse),
    )
)]
#[post("/api/admin/contact")]
pub async fn save_contact_handler(
    session: AdminSession,
    req: web::Json<Contact>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.save.execute(req.into_inner()).await {
        Ok(()) => {
            info!(admin = %session.username, "Contact info updated");
            ApiResponse::done("Contact info updated and published")
        }
        Err(SaveContactError::RepositoryError(ref msg)) => {
            error!(error = %msg, "Failed to save contact info");
            ApiResponse::internal_error_with_details("Failed to save contact info", msg)
        }
        Err(SaveContactError::RevalidationFailed(ref msg)) => {
            error!(error = %msg, "Contact saved but revalidation failed");
            ApiResponse::internal_error_with_details("Failed to refresh pages", msg)
        }
    }
}
