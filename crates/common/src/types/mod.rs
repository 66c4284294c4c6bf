use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Liveness payload returned by `/health` and the `healthcheck` procedure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Health {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl Health {
    pub fn ok() -> Self {
        Self { status: "ok".into(), timestamp: Utc::now() }
    }
}
