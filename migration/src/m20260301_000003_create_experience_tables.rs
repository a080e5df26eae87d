use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Section intro (single row)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Experience::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experience::Id)
                            .integer()
                            .not_null()
                            .primary_key()
                            .check(Expr::col(Experience::Id).eq(1)),
                    )
                    .col(
                        ColumnDef::new(Experience::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Items, keyed by the dashboard's own ids
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Experiences::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Experiences::Id).text().not_null().primary_key())
                    .col(ColumnDef::new(Experiences::Title).text().not_null().default(""))
                    .col(ColumnDef::new(Experiences::Company).text().not_null().default(""))
                    .col(ColumnDef::new(Experiences::Period).text().not_null().default(""))
                    .col(
                        ColumnDef::new(Experiences::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Experiences::Skills)
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
            .drop_table(Table::drop().table(Experiences::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Experience::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Experience {
    Table,
    Id,
    Description,
}

#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
    Title,
    Company,
    Period,
    Description,
    Skills,
}
