use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;

use crate::modules::contact::adapter::outgoing::sea_orm_entity::contact::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::contact::application::domain::Contact;
use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError,
};
use crate::shared::casing::{decode_row, encode_row, CasingError, CONTACT_FIELDS};

pub const CONTACT_ID: i32 = 1;

#[derive(Clone)]
pub struct ContactRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryPostgres {
    async fn fetch_contact(&self) -> Result<Option<Contact>, ContactRepositoryError> {
        let row = Entity::find_by_id(CONTACT_ID)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        row.map(|model| decode_row(&model, &CONTACT_FIELDS).map_err(map_casing_err))
            .transpose()
    }

    async fn upsert_contact(&self, contact: &Contact) -> Result<(), ContactRepositoryError> {
        let row: contact::Model = encode_row(contact, &CONTACT_FIELDS).map_err(map_casing_err)?;

        let model = ActiveModel {
            id: Set(CONTACT_ID),
            email: Set(row.email),
            phone: Set(row.phone),
            location: Set(row.location),
            description: Set(row.description),
        };

        Entity::insert(model)
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns([
                        Column::Email,
                        Column::Phone,
                        Column::Location,
                        Column::Description,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> ContactRepositoryError {
    ContactRepositoryError::DatabaseError(e.to_string())
}

fn map_casing_err(e: CasingError) -> ContactRepositoryError {
    ContactRepositoryError::SerializationError(e.to_string())
}
