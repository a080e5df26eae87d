use crate::shared::config::{self, ConfigError};

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub session_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key = config::required("JWT_SECRET")?;

        // HS256 wants at least 32 bytes of key material
        if secret_key.len() < 32 {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: "must be at least 32 characters long for HS256".to_string(),
            });
        }

        let session_expiry = config::parse_or("JWT_SESSION_EXPIRY", 86_400i64)?;
        if session_expiry <= 0 {
            return Err(ConfigError::Invalid {
                key: "JWT_SESSION_EXPIRY",
                reason: "must be a positive number of seconds".to_string(),
            });
        }

        let issuer = config::optional("JWT_ISSUER").unwrap_or_else(|| "portfolio".to_string());

        Ok(Self {
            secret_key,
            issuer,
            session_expiry,
        })
    }
}
