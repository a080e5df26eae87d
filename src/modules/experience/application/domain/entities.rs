use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const EXPERIENCE_PAGE: &str = "/experience";

/// Intro text plus the ordered work history. Stored in two tables and
/// joined here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExperienceSection {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub experiences: Vec<ExperienceItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExperienceItem {
    #[schema(example = "exp-01")]
    pub id: String,
    pub title: String,
    pub company: String,
    #[schema(example = "2021 - present")]
    pub period: String,
    pub description: String,
    // absent in older dashboard payloads
    #[serde(default)]
    pub skills: Vec<String>,
}

impl ExperienceSection {
    pub fn sort_by_id(&mut self) {
        self.experiences.sort_by(|a, b| a.id.cmp(&b.id));
    }
}
