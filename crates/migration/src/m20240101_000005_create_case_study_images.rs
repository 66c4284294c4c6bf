//! Create `case_study_images` table, owned by `case_studies` with cascade delete.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CaseStudyImages::Table)
                    .if_not_exists()
                    .col(pk_auto(CaseStudyImages::Id))
                    .col(integer(CaseStudyImages::CaseStudyId))
                    .col(text(CaseStudyImages::ImageUrl))
                    .col(text_null(CaseStudyImages::AltTextEn))
                    .col(text_null(CaseStudyImages::AltTextFr))
                    .col(integer(CaseStudyImages::DisplayOrder).default(0))
                    .col(timestamp_with_time_zone(CaseStudyImages::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_case_study_images_case_study")
                            .from(CaseStudyImages::Table, CaseStudyImages::CaseStudyId)
                            .to(CaseStudies::Table, CaseStudies::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CaseStudyImages::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CaseStudyImages { Table, Id, CaseStudyId, ImageUrl, AltTextEn, AltTextFr, DisplayOrder, CreatedAt }

#[derive(DeriveIden)]
enum CaseStudies { Table, Id }
