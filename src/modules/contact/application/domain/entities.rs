use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const CONTACT_PAGE: &str = "/contact";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Contact {
    #[schema(example = "hello@example.com")]
    pub email: String,
    pub phone: String,
    pub location: String,
    pub description: String,
}
