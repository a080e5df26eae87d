use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const ABOUT_PAGE: &str = "/about";

/// The about page as the dashboard and public page see it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct About {
    pub personal_info: PersonalInfo,
    pub skills: Skills,
    pub education: Vec<Education>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    pub title: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Skills {
    #[schema(example = json!(["MATLAB"]))]
    pub technical_programs: Vec<String>,
    pub technical_competencies: Vec<String>,
    pub soft_skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Education {
    #[schema(example = "Physics")]
    pub degree: String,
    pub school: String,
    #[schema(example = "2020-2024")]
    pub years: String,
    pub details: Vec<String>,
}

/// Flat form of [`About`]: personal info lifted to top-level fields, the
/// way the row stores it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutRecord {
    pub name: String,
    pub title: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub description: String,
    pub skills: Skills,
    pub education: Vec<Education>,
}

impl From<About> for AboutRecord {
    fn from(about: About) -> Self {
        let PersonalInfo {
            name,
            title,
            location,
            email,
            phone,
            linkedin,
            description,
        } = about.personal_info;

        Self {
            name,
            title,
            location,
            email,
            phone,
            linkedin,
            description,
            skills: about.skills,
            education: about.education,
        }
    }
}

impl From<AboutRecord> for About {
    fn from(record: AboutRecord) -> Self {
        Self {
            personal_info: PersonalInfo {
                name: record.name,
                title: record.title,
                location: record.location,
                email: record.email,
                phone: record.phone,
                linkedin: record.linkedin,
                description: record.description,
            },
            skills: record.skills,
            education: record.education,
        }
    }
}
