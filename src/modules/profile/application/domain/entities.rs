use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public page rebuilt after the profile changes.
pub const PROFILE_PAGE: &str = "/";

/// Landing-page hero content. A singleton.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    #[schema(example = "Jane Doe")]
    pub title: String,
    #[schema(example = "Industrial engineer")]
    pub subtitle: String,
    pub description: String,
    pub education: String,
    pub experience: String,
    pub projects: String,
    #[schema(example = "github.com/janedoe")]
    pub github_url: String,
    #[schema(example = "www.linkedin.com/in/janedoe")]
    pub linkedin_url: String,
    pub email: String,
    pub profile_photo: String,
}

impl Profile {
    /// Social links as absolute `https://` URLs for display.
    pub fn with_display_urls(mut self) -> Self {
        self.github_url = format_url(&self.github_url);
        self.linkedin_url = format_url(&self.linkedin_url);
        self
    }
}

/// Trims, drops one leading `http://` or `www.`, then prefixes `https://`
/// unless already there. Empty input stays empty.
pub fn format_url(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }

    let trimmed = url.trim();
    let clean = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("www."))
        .unwrap_or(trimmed);

    if clean.starts_with("https://") {
        clean.to_string()
    } else {
        format!("https://{}", clean)
    }
}
