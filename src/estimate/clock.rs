// src/estimate/clock.rs

use chrono::{Duration, NaiveDateTime, Timelike};

/// Floor timestamp used as the initial start estimate for a waiting node
/// with no predecessors: smaller than every real finish time.
pub fn epoch_floor() -> NaiveDateTime {
    NaiveDateTime::MIN
}

/// Add `minutes` (possibly fractional) to a timestamp.
///
/// The input is truncated to the whole minute first, then the delta is
/// applied at second resolution, so fractional average durations like
/// `90.5` carry through as 90 minutes 30 seconds rather than truncating.
/// Out-of-range or non-finite arithmetic saturates to the truncated input.
pub fn add_minutes(dt: NaiveDateTime, minutes: f64) -> NaiveDateTime {
    let truncated = dt
        - Duration::seconds(i64::from(dt.second()))
        - Duration::nanoseconds(i64::from(dt.nanosecond()));

    let delta =
        Duration::try_seconds((minutes * 60.0).round() as i64).unwrap_or_else(Duration::zero);
    truncated.checked_add_signed(delta).unwrap_or(truncated)
}
