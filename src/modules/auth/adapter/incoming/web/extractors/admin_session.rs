use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use tracing::warn;

use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::services::{verify_session, SessionError, SESSION_COOKIE};
use crate::shared::api::ApiResponse;

pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized access";

/// An admin whose `admin-token` cookie verified.
///
/// Put it first in a handler's arguments so the gate runs before the body
/// is read.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub username: String,
    pub role: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider = match req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        {
            Some(provider) => provider,
            None => {
                tracing::error!("Token provider is not registered as app data");
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let cookie = req.cookie(SESSION_COOKIE);
        let token = cookie.as_ref().map(|c| c.value());

        match verify_session(token, token_provider.get_ref().as_ref()) {
            Ok(claims) => ready(Ok(AdminSession {
                username: claims.username,
                role: claims.role,
            })),
            Err(SessionError::Unauthenticated) => {
                warn!(path = %req.path(), "Admin request without session cookie");
                ready(Err(create_api_error(ApiResponse::unauthorized(
                    UNAUTHORIZED_MESSAGE,
                ))))
            }
            Err(SessionError::InvalidToken(e)) => {
                warn!(path = %req.path(), error = %e, "Admin request with rejected session");
                ready(Err(create_api_error(ApiResponse::unauthorized(
                    UNAUTHORIZED_MESSAGE,
                ))))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
    use actix_web::{cookie::Cookie, get, test, App, Responder};
    use chrono::{Duration, Utc};

    #[get("/api/admin/whoami")]
    async fn whoami(session: AdminSession) -> impl Responder {
        ApiResponse::success(session.username)
    }

    fn jwt() -> JwtTokenService {
        JwtTokenService::new(JwtConfig {
            secret_key: "extractor_test_secret_key_0123456789abcdef".to_string(),
            issuer: "extractor_test".to_string(),
            session_expiry: 86_400,
        })
    }

    fn provider_data(svc: JwtTokenService) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
        let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(svc);
        web::Data::new(provider)
    }

    #[actix_web::test]
    async fn test_missing_cookie_is_401() {
        let app = test::init_service(
            App::new()
                .app_data(provider_data(jwt()))
                .service(whoami),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/admin/whoami").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], UNAUTHORIZED_MESSAGE);
    }

    #[actix_web::test]
    async fn test_garbage_cookie_is_401_with_same_message() {
        let app = test::init_service(
            App::new()
                .app_data(provider_data(jwt()))
                .service(whoami),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/whoami")
            .cookie(Cookie::new(SESSION_COOKIE, "not-a-jwt"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], UNAUTHORIZED_MESSAGE);
    }

    #[actix_web::test]
    async fn test_valid_cookie_passes() {
        let svc = jwt();
        let token = svc.issue_admin_token("admin").unwrap();
        let app = test::init_service(
            App::new()
                .app_data(provider_data(svc))
                .service(whoami),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/whoami")
            .cookie(Cookie::new(SESSION_COOKIE, token))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"], "admin");
    }

    #[actix_web::test]
    async fn test_expired_cookie_is_401() {
        let svc = jwt();
        let token = svc
            .sign_at("admin", Utc::now() - Duration::hours(24) - Duration::minutes(5))
            .unwrap();
        let app = test::init_service(
            App::new()
                .app_data(provider_data(svc))
                .service(whoami),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/whoami")
            .cookie(Cookie::new(SESSION_COOKIE, token))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_missing_provider_is_500() {
        let app = test::init_service(App::new().service(whoami)).await;

        let req = test::TestRequest::get().uri("/api/admin/whoami").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 500);
    }
}
