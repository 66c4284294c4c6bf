//! Create `home_page_content` table. Read through "first row" semantics.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HomePageContent::Table)
                    .if_not_exists()
                    .col(pk_auto(HomePageContent::Id))
                    .col(text(HomePageContent::HeroTitleEn))
                    .col(text(HomePageContent::HeroTitleFr))
                    .col(text(HomePageContent::HeroSubtitleEn))
                    .col(text(HomePageContent::HeroSubtitleFr))
                    .col(text(HomePageContent::AboutSectionEn))
                    .col(text(HomePageContent::AboutSectionFr))
                    .col(timestamp_with_time_zone(HomePageContent::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(HomePageContent::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum HomePageContent {
    Table,
    Id,
    HeroTitleEn,
    HeroTitleFr,
    HeroSubtitleEn,
    HeroSubtitleFr,
    AboutSectionEn,
    AboutSectionFr,
    UpdatedAt,
}
