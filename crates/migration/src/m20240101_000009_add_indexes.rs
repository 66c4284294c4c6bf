use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Image listings: filter by parent
        manager
            .create_index(
                Index::create()
                    .name("idx_project_images_project")
                    .table(ProjectImages::Table)
                    .col(ProjectImages::ProjectId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_case_study_images_case_study")
                    .table(CaseStudyImages::Table)
                    .col(CaseStudyImages::CaseStudyId)
                    .to_owned(),
            )
            .await?;

        // Project listing by category
        manager
            .create_index(
                Index::create()
                    .name("idx_projects_category")
                    .table(Projects::Table)
                    .col(Projects::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_project_images_project").table(ProjectImages::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_case_study_images_case_study").table(CaseStudyImages::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_projects_category").table(Projects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectImages { Table, ProjectId }

#[derive(DeriveIden)]
enum CaseStudyImages { Table, CaseStudyId }

#[derive(DeriveIden)]
enum Projects { Table, Category }
