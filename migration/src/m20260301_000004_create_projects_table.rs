use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Projects::Id).text().not_null().primary_key())
                    .col(ColumnDef::new(Projects::Title).text().not_null().default(""))
                    .col(ColumnDef::new(Projects::Description).text().not_null().default(""))
                    .col(
                        ColumnDef::new(Projects::LongDescription)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Projects::Image).text().not_null().default(""))
                    // NULL: no gallery, public reads fall back to the cover image
                    .col(ColumnDef::new(Projects::ImageGallery).json_binary())
                    .col(json_list(Projects::Tags))
                    .col(json_list(Projects::Objectives))
                    .col(json_list(Projects::Technologies))
                    .col(json_list(Projects::Results))
                    .col(ColumnDef::new(Projects::Link).text())
                    .col(ColumnDef::new(Projects::GithubLink).text())
                    .to_owned(),
            )
            .await?;

        // Handles "projects using X" lookups: `WHERE technologies @> '["Rust"]'`
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_projects_technologies
                ON projects USING GIN (technologies);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_projects_technologies;")
            .await?;

        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

fn json_list(column: Projects) -> ColumnDef {
    ColumnDef::new(column)
        .json_binary()
        .not_null()
        .default(Expr::cust("'[]'::jsonb"))
        .to_owned()
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Title,
    Description,
    LongDescription,
    Image,
    ImageGallery,
    Tags,
    Objectives,
    Technologies,
    Results,
    Link,
    GithubLink,
}
