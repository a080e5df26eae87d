use crate::api::schemas::{AckResponse, MessageResponse};
use crate::auth::application::use_cases::login_admin::{LoginAdminError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{http::StatusCode, post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info};

use utoipa::ToSchema;

/// Login request from the admin dashboard
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "admin")]
    pub username: String,

    #[schema(example = "correct horse battery staple")]
    pub password: String,
}

/// Admin login
///
/// Exchanges the configured admin credentials for an `admin-token` session cookie.
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Session cookie set", body = AckResponse),
        (
            status = 401,
            description = "Invalid credentials",
            body = MessageResponse,
            example = json!({ "success": false, "message": "Invalid credentials" })
        ),
        (status = 500, description = "Token signing failed", body = MessageResponse),
    )
)]
#[post("/api/admin/login")]
pub async fn login_admin_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(username = %dto.username, "Admin login attempt");

    let request = LoginRequest {
        username: dto.username,
        password: dto.password,
    };

    match data.auth.login.execute(request).await {
        Ok(session) => {
            info!(username = %session.username, "Admin logged in");
            HttpResponse::Ok()
                .cookie(data.session_cookie.build(session.token))
                .json(ApiResponse::<()>::bare(true))
        }
        Err(LoginAdminError::InvalidCredentials) => {
            ApiResponse::rejected(StatusCode::UNAUTHORIZED, "Invalid credentials")
        }
        Err(LoginAdminError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::rejected(StatusCode::INTERNAL_SERVER_ERROR, "Login failed")
        }
    }
}
