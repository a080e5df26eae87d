use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profile")]
pub struct Model {
    // Singleton: always 1. Absent when decoding a view model.
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(default)]
    pub id: i32,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub subtitle: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "Text")]
    pub education: String,

    #[sea_orm(column_type = "Text")]
    pub experience: String,

    #[sea_orm(column_type = "Text")]
    pub projects: String,

    #[sea_orm(column_type = "Text")]
    pub github_url: String,

    #[sea_orm(column_type = "Text")]
    pub linkedin_url: String,

    #[sea_orm(column_type = "Text")]
    pub email: String,

    #[sea_orm(column_type = "Text")]
    pub profile_photo: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
