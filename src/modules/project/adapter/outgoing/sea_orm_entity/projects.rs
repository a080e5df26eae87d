use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "Text")]
    pub long_description: String,

    #[sea_orm(column_type = "Text")]
    pub image: String,

    // NULL means "no gallery"; public reads substitute the cover image
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub image_gallery: Option<Json>,

    #[sea_orm(column_type = "JsonBinary")]
    pub tags: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub objectives: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub technologies: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub results: Json,

    #[sea_orm(column_type = "Text", nullable)]
    pub link: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub github_link: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
