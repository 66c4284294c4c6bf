//! Migrator registering the content store migrations in dependency order:
//! parent tables, their image tables, standalone tables, then indexes.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_services;
mod m20240101_000002_create_projects;
mod m20240101_000003_create_project_images;
mod m20240101_000004_create_case_studies;
mod m20240101_000005_create_case_study_images;
mod m20240101_000006_create_contact_form_submissions;
mod m20240101_000007_create_contact_details;
mod m20240101_000008_create_home_page_content;
mod m20240101_000009_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_services::Migration),
            Box::new(m20240101_000002_create_projects::Migration),
            Box::new(m20240101_000003_create_project_images::Migration),
            Box::new(m20240101_000004_create_case_studies::Migration),
            Box::new(m20240101_000005_create_case_study_images::Migration),
            Box::new(m20240101_000006_create_contact_form_submissions::Migration),
            Box::new(m20240101_000007_create_contact_details::Migration),
            Box::new(m20240101_000008_create_home_page_content::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000009_add_indexes::Migration),
        ]
    }
}
