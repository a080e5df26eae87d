use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;

use crate::modules::about::adapter::outgoing::sea_orm_entity::about::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::about::application::domain::{About, AboutRecord};
use crate::modules::about::application::ports::outgoing::{AboutRepository, AboutRepositoryError};
use crate::shared::casing::{decode_row, encode_row, CasingError, ABOUT_FIELDS};

pub const ABOUT_ID: i32 = 1;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct AboutRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AboutRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AboutRepository for AboutRepositoryPostgres {
    async fn fetch_about(&self) -> Result<Option<About>, AboutRepositoryError> {
        let row = Entity::find_by_id(ABOUT_ID)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        match row {
            None => Ok(None),
            Some(model) => {
                let record: AboutRecord =
                    decode_row(&model, &ABOUT_FIELDS).map_err(map_casing_err)?;
                Ok(Some(About::from(record)))
            }
        }
    }

    async fn upsert_about(&self, about: &About) -> Result<(), AboutRepositoryError> {
        let record = AboutRecord::from(about.clone());
        let row: about::Model = encode_row(&record, &ABOUT_FIELDS).map_err(map_casing_err)?;

        let model = ActiveModel {
            id: Set(ABOUT_ID),
            name: Set(row.name),
            title: Set(row.title),
            location: Set(row.location),
            email: Set(row.email),
            phone: Set(row.phone),
            linkedin: Set(row.linkedin),
            description: Set(row.description),
            skills: Set(row.skills),
            education: Set(row.education),
        };

        Entity::insert(model)
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns([
                        Column::Name,
                        Column::Title,
                        Column::Location,
                        Column::Email,
                        Column::Phone,
                        Column::Linkedin,
                        Column::Description,
                        Column::Skills,
                        Column::Education,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn map_db_err(e: DbErr) -> AboutRepositoryError {
    AboutRepositoryError::DatabaseError(e.to_string())
}

fn map_casing_err(e: CasingError) -> AboutRepositoryError {
    AboutRepositoryError::SerializationError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
