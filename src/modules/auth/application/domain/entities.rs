use std::fmt;

use crate::shared::config::{self, ConfigError};

/// The single admin account. Compared by exact string equality.
#[derive(Clone)]
pub struct AdminCredentials {
    username: String,
    password: String,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(
            config::required("ADMIN_USERNAME")?,
            config::required("ADMIN_PASSWORD")?,
        ))
    }

    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
