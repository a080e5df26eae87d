// src/shared/config.rs
use std::env;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Loads `.env.<RUST_ENV>` and falls back to `.env`.
pub fn load_dotenv() {
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

pub fn is_production() -> bool {
    env::var("RUST_ENV").as_deref() == Ok("production")
}

/// Present and non-blank, or `ConfigError::Missing`.
pub fn required(key: &'static str) -> Result<String, ConfigError> {
    optional(key).ok_or(ConfigError::Missing(key))
}

/// Blank values count as unset.
pub fn optional(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn parse_or<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional(key) {
        None => Ok(default),
        Some(raw) => raw.parse::<T>().map_err(|e| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
    }
}

/// Process-level settings read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Stale markers stay in process memory when unset.
    pub redis_url: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: optional("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or("PORT", 8080u16)?,
            database_url: required("DATABASE_URL")?,
            redis_url: optional("REDIS_URL"),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
