//! Create `contact_form_submissions` table. Append-only inbox.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContactFormSubmissions::Table)
                    .if_not_exists()
                    .col(pk_auto(ContactFormSubmissions::Id))
                    .col(text(ContactFormSubmissions::Name))
                    .col(text(ContactFormSubmissions::Email))
                    .col(text(ContactFormSubmissions::Message))
                    .col(timestamp_with_time_zone(ContactFormSubmissions::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ContactFormSubmissions::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ContactFormSubmissions { Table, Id, Name, Email, Message, CreatedAt }
