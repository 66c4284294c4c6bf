//! Create `case_studies` table: six bilingual text pairs per study.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CaseStudies::Table)
                    .if_not_exists()
                    .col(pk_auto(CaseStudies::Id))
                    .col(text(CaseStudies::TitleEn))
                    .col(text(CaseStudies::TitleFr))
                    .col(text(CaseStudies::DescriptionEn))
                    .col(text(CaseStudies::DescriptionFr))
                    .col(text(CaseStudies::ClientNameEn))
                    .col(text(CaseStudies::ClientNameFr))
                    .col(text(CaseStudies::ChallengeDescriptionEn))
                    .col(text(CaseStudies::ChallengeDescriptionFr))
                    .col(text(CaseStudies::SolutionDescriptionEn))
                    .col(text(CaseStudies::SolutionDescriptionFr))
                    .col(text(CaseStudies::ResultsDescriptionEn))
                    .col(text(CaseStudies::ResultsDescriptionFr))
                    .col(timestamp_with_time_zone(CaseStudies::CreatedAt))
                    .col(timestamp_with_time_zone(CaseStudies::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CaseStudies::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CaseStudies {
    Table,
    Id,
    TitleEn,
    TitleFr,
    DescriptionEn,
    DescriptionFr,
    ClientNameEn,
    ClientNameFr,
    ChallengeDescriptionEn,
    ChallengeDescriptionFr,
    SolutionDescriptionEn,
    SolutionDescriptionFr,
    ResultsDescriptionEn,
    ResultsDescriptionFr,
    CreatedAt,
    UpdatedAt,
}
