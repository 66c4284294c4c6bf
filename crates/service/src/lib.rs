//! Access contract for the studio site content store.
//! - One module of free async functions per entity group.
//! - Inputs are validated here, before any store access, reusing the
//!   validators of the `models` crate.
//! - Failures surface as [`ServiceError`]; absence on get/delete is a value,
//!   not an error.

pub mod errors;
pub mod pagination;
pub mod types;
pub mod services;
pub mod projects;
pub mod project_images;
pub mod case_studies;
pub mod case_study_images;
pub mod contact_details;
pub mod home_page;
pub mod contact_form;
#[cfg(test)]
pub mod test_support;

pub use errors::ServiceError;
pub use pagination::ListFilter;
pub use types::{DeleteOutcome, IdParam};
