//! Create `projects` table.
//!
//! `category` holds the snake_case name of a project category; the set of
//! accepted values is enforced by the `ProjectCategory` active enum.
use sea_orm_migration::{prelude::*, schema::*};

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
                    .col(pk_auto(Projects::Id))
                    .col(text(Projects::TitleEn))
                    .col(text(Projects::TitleFr))
                    .col(text(Projects::DescriptionEn))
                    .col(text(Projects::DescriptionFr))
                    .col(text(Projects::Category))
                    .col(timestamp_with_time_zone(Projects::CreatedAt))
                    .col(timestamp_with_time_zone(Projects::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Projects::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Projects { Table, Id, TitleEn, TitleFr, DescriptionEn, DescriptionFr, Category, CreatedAt, UpdatedAt }
