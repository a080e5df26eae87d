use std::sync::Arc;

use actix_web::{cookie::Cookie, web};

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::services::SESSION_COOKIE;

pub const TEST_ADMIN: &str = "admin";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        issuer: "portfolio-test".to_string(),
        secret_key: "test_secret_key_for_testing_only_0123456789".to_string(),
        session_expiry: 86_400,
    }
}

pub fn create_test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(test_jwt_config())
}

/// Registers the token provider the `AdminSession` extractor looks up.
pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(create_test_jwt_service());
    web::Data::new(provider)
}

/// A session cookie that `token_provider_data()` accepts.
pub fn admin_cookie() -> Cookie<'static> {
    let token = create_test_jwt_service()
        .issue_admin_token(TEST_ADMIN)
        .expect("test token should sign");
    Cookie::new(SESSION_COOKIE, token)
}
