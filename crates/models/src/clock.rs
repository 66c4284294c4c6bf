//! Timestamps as stored in the content store: UTC, microsecond precision.

use chrono::{Duration, SubsecRound, Utc};
use sea_orm::prelude::DateTimeWithTimeZone;

pub fn now() -> DateTimeWithTimeZone {
    Utc::now().trunc_subsecs(6).into()
}

/// Next `updated_at` for a row last touched at `previous`; always later than it.
pub fn touch(previous: DateTimeWithTimeZone) -> DateTimeWithTimeZone {
    let now = now();
    if now > previous { now } else { previous + Duration::microseconds(1) }
}
