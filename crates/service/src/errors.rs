use models::errors::ModelError;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("referential integrity error: {0}")]
    ReferentialIntegrity(String),
    #[error("store error: {0}")]
    Store(String),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: i32) -> Self {
        Self::NotFound(format!("{entity} with id {id} not found"))
    }

    pub fn missing_parent(entity: &str, id: i32) -> Self {
        Self::ReferentialIntegrity(format!("{entity} with id {id} does not exist"))
    }

    /// Stable code for external mapping/logging
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::Validation(_) => "VALIDATION_ERROR",
            ServiceError::NotFound(_) => "NOT_FOUND",
            ServiceError::ReferentialIntegrity(_) => "REFERENTIAL_INTEGRITY",
            ServiceError::Store(_) => "STORE_ERROR",
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => ServiceError::Validation(msg),
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self {
        ServiceError::Store(e.to_string())
    }
}

/// Insert of a child row: a foreign-key violation means the parent vanished
/// between the existence check and the insert.
pub(crate) fn child_insert_error(e: DbErr, parent: &str, parent_id: i32) -> ServiceError {
    match e.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => ServiceError::missing_parent(parent, parent_id),
        _ => ServiceError::from(e),
    }
}

/// An update whose row disappeared after it was loaded.
pub(crate) fn update_error(e: DbErr, entity: &str, id: i32) -> ServiceError {
    match e {
        DbErr::RecordNotUpdated => ServiceError::not_found(entity, id),
        other => ServiceError::from(other),
    }
}
