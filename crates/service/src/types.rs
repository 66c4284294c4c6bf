use serde::{Deserialize, Serialize};

/// Single-id input shared by get/delete operations and image listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdParam {
    pub id: i32,
}

/// Result of a delete: `success` is false when nothing matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteOutcome {
    pub success: bool,
}

impl DeleteOutcome {
    pub fn from_rows(rows_affected: u64) -> Self {
        Self { success: rows_affected > 0 }
    }
}
