//! Create `contact_details` table. Read through "first row" semantics.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContactDetails::Table)
                    .if_not_exists()
                    .col(pk_auto(ContactDetails::Id))
                    .col(text(ContactDetails::Email))
                    .col(text(ContactDetails::Phone))
                    .col(text(ContactDetails::Address))
                    .col(text(ContactDetails::WorkingHoursEn))
                    .col(text(ContactDetails::WorkingHoursFr))
                    .col(timestamp_with_time_zone(ContactDetails::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ContactDetails::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ContactDetails { Table, Id, Email, Phone, Address, WorkingHoursEn, WorkingHoursFr, UpdatedAt }
