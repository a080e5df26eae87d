use async_trait::async_trait;
use sea_orm::{
    DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, Set,
    TransactionTrait,
};
use std::sync::Arc;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{
    self, ActiveModel, Entity,
};
use crate::modules::project::application::domain::Project;
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};
use crate::shared::casing::{decode_row, encode_row, CasingError, PROJECT_FIELDS};
use crate::shared::list_ids::compare_list_ids;

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_project(row: &projects::Model) -> Result<Project, ProjectRepositoryError> {
        decode_row(row, &PROJECT_FIELDS).map_err(map_casing_err)
    }

    fn to_active_model(project: &Project) -> Result<ActiveModel, ProjectRepositoryError> {
        let row: projects::Model = encode_row(project, &PROJECT_FIELDS).map_err(map_casing_err)?;

        Ok(ActiveModel {
            id: Set(row.id),
            title: Set(row.title),
            description: Set(row.description),
            long_description: Set(row.long_description),
            image: Set(row.image),
            image_gallery: Set(row.image_gallery),
            tags: Set(row.tags),
            objectives: Set(row.objectives),
            technologies: Set(row.technologies),
            results: Set(row.results),
            link: Set(row.link),
            github_link: Set(row.github_link),
        })
    }

    async fn swap_rows(txn: &DatabaseTransaction, rows: Vec<ActiveModel>) -> Result<(), DbErr> {
        Entity::delete_many().exec(txn).await?;

        if !rows.is_empty() {
            Entity::insert_many(rows).exec_without_returning(txn).await?;
        }

        Ok(())
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn fetch_all(&self) -> Result<Vec<Project>, ProjectRepositoryError> {
        let mut rows = Entity::find().all(&*self.db).await.map_err(map_db_err)?;
        rows.sort_by(|a, b| compare_list_ids(&a.id, &b.id));

        rows.iter().map(Self::to_project).collect()
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<Project>, ProjectRepositoryError> {
        let row = Entity::find_by_id(id.to_string())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        row.as_ref().map(Self::to_project).transpose()
    }

    async fn replace_all(&self, projects: &[Project]) -> Result<(), ProjectRepositoryError> {
        let rows = projects
            .iter()
            .map(Self::to_active_model)
            .collect::<Result<Vec<_>, _>>()?;

        let txn = self.db.begin().await.map_err(map_db_err)?;

        if let Err(e) = Self::swap_rows(&txn, rows).await {
            let _ = txn.rollback().await;
            return Err(map_db_err(e));
        }

        txn.commit().await.map_err(map_db_err)
    }
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

fn map_casing_err(e: CasingError) -> ProjectRepositoryError {
    ProjectRepositoryError::SerializationError(e.to_string())
}
