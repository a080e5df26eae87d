use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::mail::application::domain::ContactMessage;
use crate::mail::application::ports::incoming::use_cases::SendContactMessageError;
use crate::mail::application::ports::outgoing::DeliveryReceipt;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::http::StatusCode;
use actix_web::{post, web, Responder};
use tracing::error;

/// Send a contact-form message to the site owner
#[utoipa::path(
    post,
    path = "/api/send",
    tag = "mail",
    request_body = ContactMessage,
    responses(
        (status = 200, description = "Accepted by the mail provider", body = inline(SuccessResponse<DeliveryReceipt>)),
        (status = 400, description = "Blank field or invalid email", body = ErrorResponse),
        (status = 500, description = "Mail not configured or provider error", body = ErrorResponse),
    )
)]
#[post("/api/send")]
pub async fn send_contact_message_handler(
    req: web::Json<ContactMessage>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.mail.send_contact_message.execute(req.into_inner()).await {
        Ok(receipt) => ApiResponse::success(receipt),
        Err(e @ SendContactMessageError::MissingField(_))
        | Err(e @ SendContactMessageError::InvalidReplyTo(_)) => {
            ApiResponse::bad_request(&e.to_string())
        }
        Err(e @ SendContactMessageError::NotConfigured(_)) => {
            error!(error = %e, "Contact mail unavailable");
            ApiResponse::error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
        Err(SendContactMessageError::DeliveryFailed(ref msg)) => {
            ApiResponse::error(StatusCode::INTERNAL_SERVER_ERROR, msg)
        }
    }
}
