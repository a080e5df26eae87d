use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::profile::application::domain::Profile;
use crate::shared::api::ApiResponse;
use crate::shared::audience::Audience;
use crate::AppState;
use actix_web::{get, web, Responder};

use super::profile_read_failure;

/// Public profile
///
/// Social links are returned as absolute `https://` URLs.
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "profile",
    responses(
        (status = 200, description = "Profile", body = inline(SuccessResponse<Profile>)),
        (status = 404, description = "No profile stored", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse),
    )
)]
#[get("/api/profile")]
pub async fn get_public_profile_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profile.get.execute(Audience::Public).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => profile_read_failure(e),
    }
}
