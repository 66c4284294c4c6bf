//! Content store entities for the studio site.
//!
//! Every table has an integer identity assigned by the database. Image tables
//! reference their parent with a required foreign key and cascade on delete.

pub mod errors;
pub mod db;
pub mod clock;
pub mod validation;
pub mod service;
pub mod project;
pub mod project_image;
pub mod case_study;
pub mod case_study_image;
pub mod contact_form_submission;
pub mod contact_details;
pub mod home_page_content;

pub use project::ProjectCategory;

#[cfg(test)]
mod tests;
