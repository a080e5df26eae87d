use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;

use crate::modules::profile::adapter::outgoing::sea_orm_entity::profile::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::profile::application::domain::Profile;
use crate::modules::profile::application::ports::outgoing::{
    ProfileRepository, ProfileRepositoryError,
};
use crate::shared::casing::{decode_row, encode_row, CasingError, PROFILE_FIELDS};

pub const PROFILE_ID: i32 = 1;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn fetch_profile(&self) -> Result<Option<Profile>, ProfileRepositoryError> {
        let row = Entity::find_by_id(PROFILE_ID)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        row.map(|model| decode_row(&model, &PROFILE_FIELDS))
            .transpose()
            .map_err(map_casing_err)
    }

    async fn upsert_profile(&self, profile: &Profile) -> Result<(), ProfileRepositoryError> {
        let row: profile::Model = encode_row(profile, &PROFILE_FIELDS).map_err(map_casing_err)?;

        let model = ActiveModel {
            id: Set(PROFILE_ID),
            title: Set(row.title),
            subtitle: Set(row.subtitle),
            description: Set(row.description),
            education: Set(row.education),
            experience: Set(row.experience),
            projects: Set(row.projects),
            github_url: Set(row.github_url),
            linkedin_url: Set(row.linkedin_url),
            email: Set(row.email),
            profile_photo: Set(row.profile_photo),
        };

        Entity::insert(model)
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns([
                        Column::Title,
                        Column::Subtitle,
                        Column::Description,
                        Column::Education,
                        Column::Experience,
                        Column::Projects,
                        Column::GithubUrl,
                        Column::LinkedinUrl,
                        Column::Email,
                        Column::ProfilePhoto,
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

fn map_db_err(e: DbErr) -> ProfileRepositoryError {
    ProfileRepositoryError::DatabaseError(e.to_string())
}

fn map_casing_err(e: CasingError) -> ProfileRepositoryError {
    ProfileRepositoryError::SerializationError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
