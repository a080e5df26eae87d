use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::profile::application::domain::Profile;
use crate::shared::api::ApiResponse;
use crate::shared::audience::Audience;
use crate::AppState;
use actix_web::{get, web, Responder};

use super::profile_read_failure;

/// Admin profile
///
/// Returns the profile exactly as stored.
#[utoipa::path(
    get,
    path = "/api/admin/profile",
    tag = "profile",
    security(("admin_cookie" = [])),
    responses(
        (status = 200, description = "Profile", body = inline(SuccessResponse<Profile>)),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "No profile stored", body = ErrorResponse),
        (status = 500, description = "Backend failure", body = ErrorResponse),
    )
)]
#[get("/api/admin/profile")]
pub async fn get_admin_profile_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile.get.execute(Audience::Admin).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => profile_read_failure(e),
    }
}
