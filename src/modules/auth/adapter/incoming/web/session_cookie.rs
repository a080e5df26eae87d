use actix_web::cookie::{time::Duration, Cookie, SameSite};

use crate::auth::application::services::SESSION_COOKIE;

/// How the `admin-token` cookie is issued.
#[derive(Debug, Clone)]
pub struct SessionCookieConfig {
    pub secure: bool,
    pub max_age_secs: i64,
}

impl SessionCookieConfig {
    pub fn new(secure: bool, max_age_secs: i64) -> Self {
        Self {
            secure,
            max_age_secs,
        }
    }

    pub fn build(&self, token: String) -> Cookie<'static> {
        Cookie::build(SESSION_COOKIE, token)
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Strict)
            .max_age(Duration::seconds(self.max_age_secs))
            .finish()
    }
}

impl Default for SessionCookieConfig {
    fn default() -> Self {
        Self::new(false, 86_400)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_attributes() {
        let cookie = SessionCookieConfig::new(true, 86_400).build("tok".to_string());

        assert_eq!(cookie.name(), "admin-token");
        assert_eq!(cookie.value(), "tok");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.max_age(), Some(Duration::days(1)));
    }

    #[test]
    fn test_default_is_not_secure() {
        let cookie = SessionCookieConfig::default().build("tok".to_string());
        assert_eq!(cookie.secure(), Some(false));
    }
}
