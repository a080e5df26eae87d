use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use std::fmt;

use crate::auth::application::ports::outgoing::token_provider::{
    AdminClaims, TokenError, TokenProvider,
};

use super::jwt_config::JwtConfig;

pub const ADMIN_ROLE: &str = "admin";

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Signs a session token as if issued at `issued_at`.
    pub fn sign_at(&self, username: &str, issued_at: DateTime<Utc>) -> Result<String, TokenError> {
        let expiration = issued_at + Duration::seconds(self.config.session_expiry);

        let claims = AdminClaims {
            username: username.to_string(),
            role: ADMIN_ROLE.to_string(),
            iss: self.config.issuer.clone(),
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }
}

impl TokenProvider for JwtTokenService {
    fn issue_admin_token(&self, username: &str) -> Result<String, TokenError> {
        self.sign_at(username, Utc::now())
    }

    fn verify_token(&self, token: &str) -> Result<AdminClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.set_issuer(&[&self.config.issuer]);

        let decoded =
            decode::<AdminClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: Token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: Invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                        tracing::error!("Security alert: Malformed or invalid algorithm token");
                        TokenError::MalformedToken
                    }
                    ErrorKind::Base64(_) | ErrorKind::Json(_) | ErrorKind::Utf8(_) => {
                        tracing::warn!("Token verification failed: Malformed token");
                        TokenError::MalformedToken
                    }
                    _ => {
                        tracing::warn!("Token verification failed: {}", e);
                        TokenError::MalformedToken
                    }
                }
            })?;

        Ok(decoded.claims)
    }
}
