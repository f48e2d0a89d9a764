//! Create `services` table.
//! One row per salon offering; category is stored as its literal label.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(pk_auto(Services::Id))
                    .col(string_len(Services::Name, 256))
                    .col(text(Services::Description).default(""))
                    .col(string_len(Services::Category, 64))
                    .col(double(Services::Price))
                    .col(integer(Services::DurationMinutes))
                    .col(integer(Services::DifficultyLevel))
                    .col(double(Services::PopularityScore))
                    .to_owned(),
            )
            .await?;

        // Sorting by price is the common listing
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_services_price")
                    .table(Services::Table)
                    .col(Services::Price)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Services::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Services {
    Table,
    Id,
    Name,
    Description,
    Category,
    Price,
    DurationMinutes,
    DifficultyLevel,
    PopularityScore,
}
