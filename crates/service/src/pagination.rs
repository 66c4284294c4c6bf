//! Limit/offset windows for list operations.

use sea_orm::QuerySelect;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Largest window bound the store binds as a signed 64-bit integer.
const MAX_BOUND: u64 = i64::MAX as u64;

/// Optional result window: `limit` caps the count, `offset` skips rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFilter {
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
}

impl ListFilter {
    pub fn new(limit: Option<u64>, offset: Option<u64>) -> Self {
        Self { limit, offset }
    }

    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.limit == Some(0) {
            return Err(ServiceError::Validation("limit must be a positive integer".into()));
        }
        if self.limit.is_some_and(|l| l > MAX_BOUND) {
            return Err(ServiceError::Validation(format!("limit must not exceed {MAX_BOUND}")));
        }
        if self.offset.is_some_and(|o| o > MAX_BOUND) {
            return Err(ServiceError::Validation(format!("offset must not exceed {MAX_BOUND}")));
        }
        Ok(())
    }

    /// Apply the window to an already filtered and ordered select.
    pub fn apply<S: QuerySelect>(&self, select: S) -> S {
        match (self.limit, self.offset) {
            (Some(limit), Some(offset)) => select.limit(limit).offset(offset),
            (Some(limit), None) => select.limit(limit),
            // SQLite rejects OFFSET without LIMIT
            (None, Some(offset)) => select.limit(MAX_BOUND).offset(offset),
            (None, None) => select,
        }
    }
}
