use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(About::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(About::Id)
                            .integer()
                            .not_null()
                            .primary_key()
                            .check(Expr::col(About::Id).eq(1)),
                    )
                    .col(ColumnDef::new(About::Name).text().not_null().default(""))
                    .col(ColumnDef::new(About::Title).text().not_null().default(""))
                    .col(ColumnDef::new(About::Location).text().not_null().default(""))
                    .col(ColumnDef::new(About::Email).text().not_null().default(""))
                    .col(ColumnDef::new(About::Phone).text().not_null().default(""))
                    .col(ColumnDef::new(About::Linkedin).text().not_null().default(""))
                    .col(ColumnDef::new(About::Description).text().not_null().default(""))
                    // {technical_programs, technical_competencies, soft_skills}
                    .col(
                        ColumnDef::new(About::Skills)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'{}'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(About::Education)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(About::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum About {
    Table,
    Id,
    Name,
    Title,
    Location,
    Email,
    Phone,
    Linkedin,
    Description,
    Skills,
    Education,
}
