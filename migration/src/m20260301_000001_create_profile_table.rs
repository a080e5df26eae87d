use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Single row, id = 1
        manager
            .create_table(
                Table::create()
                    .table(Profile::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Profile::Id)
                            .integer()
                            .not_null()
                            .primary_key()
                            .check(Expr::col(Profile::Id).eq(1)),
                    )
                    .col(ColumnDef::new(Profile::Title).text().not_null().default(""))
                    .col(ColumnDef::new(Profile::Subtitle).text().not_null().default(""))
                    .col(ColumnDef::new(Profile::Description).text().not_null().default(""))
                    .col(ColumnDef::new(Profile::Education).text().not_null().default(""))
                    .col(ColumnDef::new(Profile::Experience).text().not_null().default(""))
                    .col(ColumnDef::new(Profile::Projects).text().not_null().default(""))
                    .col(ColumnDef::new(Profile::GithubUrl).text().not_null().default(""))
                    .col(ColumnDef::new(Profile::LinkedinUrl).text().not_null().default(""))
                    .col(ColumnDef::new(Profile::Email).text().not_null().default(""))
                    .col(ColumnDef::new(Profile::ProfilePhoto).text().not_null().default(""))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Profile {
    Table,
    Id,
    Title,
    Subtitle,
    Description,
    Education,
    Experience,
    Projects,
    GithubUrl,
    LinkedinUrl,
    Email,
    ProfilePhoto,
}
