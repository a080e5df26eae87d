use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, Set,
    TransactionTrait,
};
use std::sync::Arc;

use crate::modules::experience::adapter::outgoing::sea_orm_entity::{experience, experiences};
use crate::modules::experience::application::domain::{ExperienceItem, ExperienceSection};
use crate::modules::experience::application::ports::outgoing::{
    ExperienceRepository, ExperienceRepositoryError,
};
use crate::shared::casing::{decode_row, encode_row, CasingError, EXPERIENCE_FIELDS};
use crate::shared::list_ids::compare_list_ids;

pub const EXPERIENCE_ID: i32 = 1;

#[derive(Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_active_models(
        items: &[ExperienceItem],
    ) -> Result<Vec<experiences::ActiveModel>, ExperienceRepositoryError> {
        items
            .iter()
            .map(|item| {
                let row: experiences::Model =
                    encode_row(item, &EXPERIENCE_FIELDS).map_err(map_casing_err)?;
                Ok(experiences::ActiveModel {
                    id: Set(row.id),
                    title: Set(row.title),
                    company: Set(row.company),
                    period: Set(row.period),
                    description: Set(row.description),
                    skills: Set(row.skills),
                })
            })
            .collect()
    }

    async fn write_section(
        txn: &DatabaseTransaction,
        description: &str,
        rows: Vec<experiences::ActiveModel>,
    ) -> Result<(), DbErr> {
        let intro = experience::ActiveModel {
            id: Set(EXPERIENCE_ID),
            description: Set(description.to_string()),
        };

        experience::Entity::insert(intro)
            .on_conflict(
                OnConflict::column(experience::Column::Id)
                    .update_column(experience::Column::Description)
                    .to_owned(),
            )
            .exec_without_returning(txn)
            .await?;

        experiences::Entity::delete_many().exec(txn).await?;

        if !rows.is_empty() {
            experiences::Entity::insert_many(rows)
                .exec_without_returning(txn)
                .await?;
        }

        Ok(())
    }
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryPostgres {
    async fn fetch_section(&self) -> Result<Option<ExperienceSection>, ExperienceRepositoryError> {
        let Some(intro) = experience::Entity::find_by_id(EXPERIENCE_ID)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let mut rows = experiences::Entity::find()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;
        // ids are text; "10" must still follow "2"
        rows.sort_by(|a, b| compare_list_ids(&a.id, &b.id));

        let experiences = rows
            .iter()
            .map(|row| decode_row(row, &EXPERIENCE_FIELDS))
            .collect::<Result<Vec<ExperienceItem>, _>>()
            .map_err(map_casing_err)?;

        Ok(Some(ExperienceSection {
            description: intro.description,
            experiences,
        }))
    }

    async fn replace_section(
        &self,
        section: &ExperienceSection,
    ) -> Result<(), ExperienceRepositoryError> {
        let rows = Self::to_active_models(&section.experiences)?;

        let txn = self.db.begin().await.map_err(map_db_err)?;

        if let Err(e) = Self::write_section(&txn, &section.description, rows).await {
            let _ = txn.rollback().await;
            return Err(map_db_err(e));
        }

        txn.commit().await.map_err(map_db_err)
    }
}

fn map_db_err(e: DbErr) -> ExperienceRepositoryError {
    ExperienceRepositoryError::DatabaseError(e.to_string())
}

fn map_casing_err(e: CasingError) -> ExperienceRepositoryError {
    ExperienceRepositoryError::SerializationError(e.to_string())
}
