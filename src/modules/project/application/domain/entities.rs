use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const PROJECTS_PAGE: &str = "/portfolio";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[schema(example = "portfolio-site")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub image_gallery: Option<Vec<String>>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub results: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub github_link: Option<String>,
}

impl Project {
    /// Public pages always render a gallery; fall back to the cover image.
    pub fn with_gallery_fallback(mut self) -> Self {
        if self.image_gallery.is_none() {
            self.image_gallery = Some(vec![self.image.clone()]);
        }
        self
    }
}

/// Body shape for both list reads and the replace-all write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProjectList {
    #[serde(default)]
    pub projects: Vec<Project>,
}
