use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,
    #[error("Invalid token signature")]
    InvalidSignature,
    #[error("Malformed token")]
    MalformedToken,
    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// Claims carried by the admin session token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminClaims {
    pub username: String,
    pub role: String,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
}

pub trait TokenProvider: Send + Sync {
    fn issue_admin_token(&self, username: &str) -> Result<String, TokenError>;
    fn verify_token(&self, token: &str) -> Result<AdminClaims, TokenError>;
}
