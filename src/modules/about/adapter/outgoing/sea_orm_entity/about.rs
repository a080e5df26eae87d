use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "about")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(default)]
    pub id: i32,

    #[sea_orm(column_type = "Text")]
    pub name: String,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub location: String,

    #[sea_orm(column_type = "Text")]
    pub email: String,

    #[sea_orm(column_type = "Text")]
    pub phone: String,

    #[sea_orm(column_type = "Text")]
    pub linkedin: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    // {technical_programs, technical_competencies, soft_skills}
    #[sea_orm(column_type = "JsonBinary")]
    pub skills: Json,

    // [{degree, school, years, details}]
    #[sea_orm(column_type = "JsonBinary")]
    pub education: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
