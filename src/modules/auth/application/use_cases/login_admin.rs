use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::auth::application::domain::AdminCredentials;
use crate::auth::application::ports::outgoing::TokenProvider;

// ====================== Login Request ===========================

#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoginAdminResponse {
    pub username: String,
    pub token: String,
}

// ====================== Login Error =============================

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoginAdminError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

// ====================== Use case ================================

#[async_trait]
pub trait LoginAdminUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginAdminResponse, LoginAdminError>;
}

pub struct LoginAdminService {
    credentials: AdminCredentials,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl LoginAdminService {
    pub fn new(
        credentials: AdminCredentials,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            credentials,
            token_provider,
        }
    }
}

#[async_trait]
impl LoginAdminUseCase for LoginAdminService {
    async fn execute(&self, request: LoginRequest) -> Result<LoginAdminResponse, LoginAdminError> {
        if !self.credentials.matches(&request.username, &request.password) {
            warn!(username = %request.username, "Admin login rejected");
            return Err(LoginAdminError::InvalidCredentials);
        }

        let token = self
            .token_provider
            .issue_admin_token(&request.username)
            .map_err(|e| LoginAdminError::TokenGenerationFailed(e.to_string()))?;

        info!(username = %request.username, "Admin session issued");

        Ok(LoginAdminResponse {
            username: request.username,
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::{AdminClaims, TokenError};

    struct StaticTokenProvider {
        issue: Result<String, TokenError>,
    }

    impl TokenProvider for StaticTokenProvider {
        fn issue_admin_token(&self, _username: &str) -> Result<String, TokenError> {
            self.issue.clone()
        }

        fn verify_token(&self, _token: &str) -> Result<AdminClaims, TokenError> {
            Err(TokenError::MalformedToken)
        }
    }

    fn service(issue: Result<String, TokenError>) -> LoginAdminService {
        LoginAdminService::new(
            AdminCredentials::new("admin", "hunter2"),
            Arc::new(StaticTokenProvider { issue }),
        )
    }

    fn request(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_success_returns_token() {
        let uc = service(Ok("signed.jwt.token".to_string()));

        let resp = uc.execute(request("admin", "hunter2")).await.unwrap();

        assert_eq!(resp.username, "admin");
        assert_eq!(resp.token, "signed.jwt.token");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let uc = service(Ok("never".to_string()));

        let err = uc.execute(request("admin", "wrong")).await.unwrap_err();

        assert_eq!(err, LoginAdminError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_login_token_failure() {
        let uc = service(Err(TokenError::EncodingError("bad key".to_string())));

        let err = uc.execute(request("admin", "hunter2")).await.unwrap_err();

        assert!(matches!(err, LoginAdminError::TokenGenerationFailed(msg) if msg.contains("bad key")));
    }
}
