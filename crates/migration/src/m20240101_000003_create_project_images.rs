//! Create `project_images` table.
//! Rows are owned by a project and removed with it (`ON DELETE CASCADE`).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectImages::Table)
                    .if_not_exists()
                    .col(pk_auto(ProjectImages::Id))
                    .col(integer(ProjectImages::ProjectId))
                    .col(text(ProjectImages::ImageUrl))
                    .col(text_null(ProjectImages::AltTextEn))
                    .col(text_null(ProjectImages::AltTextFr))
                    .col(integer(ProjectImages::DisplayOrder).default(0))
                    .col(timestamp_with_time_zone(ProjectImages::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_images_project")
                            .from(ProjectImages::Table, ProjectImages::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ProjectImages::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ProjectImages { Table, Id, ProjectId, ImageUrl, AltTextEn, AltTextFr, DisplayOrder, CreatedAt }

#[derive(DeriveIden)]
enum Projects { Table, Id }
