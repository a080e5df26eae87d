use thiserror::Error;

use crate::auth::application::ports::outgoing::{AdminClaims, TokenError, TokenProvider};

/// Cookie that carries the admin session token.
pub const SESSION_COOKIE: &str = "admin-token";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no session token presented")]
    Unauthenticated,
    #[error("invalid session token: {0}")]
    InvalidToken(#[from] TokenError),
}

/// Any token that verifies grants full admin rights; there are no finer roles.
pub fn verify_session(
    token: Option<&str>,
    provider: &dyn TokenProvider,
) -> Result<AdminClaims, SessionError> {
    let token = match token.map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => return Err(SessionError::Unauthenticated),
    };

    Ok(provider.verify_token(token)?)
}
