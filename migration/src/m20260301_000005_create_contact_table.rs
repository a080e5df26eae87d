use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contact::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Contact::Id)
                            .integer()
                            .not_null()
                            .primary_key()
                            .check(Expr::col(Contact::Id).eq(1)),
                    )
                    .col(ColumnDef::new(Contact::Email).text().not_null().default(""))
                    .col(ColumnDef::new(Contact::Phone).text().not_null().default(""))
                    .col(ColumnDef::new(Contact::Location).text().not_null().default(""))
                    .col(ColumnDef::new(Contact::Description).text().not_null().default(""))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Contact::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Contact {
    Table,
    Id,
    Email,
    Phone,
    Location,
    Description,
}
