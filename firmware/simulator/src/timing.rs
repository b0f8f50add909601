//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in `no_std`
//! environments, so they are defined here rather than in the common crate.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Event poll interval. Redraws still happen once per second.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Local time offset from UTC (UTC+3).
pub const UTC_OFFSET_SECONDS: i64 = 3 * 3600;

const SECONDS_PER_DAY: i64 = 86_400;

/// Local seconds since midnight for a Unix timestamp.
pub fn seconds_of_day(unix_seconds: i64) -> u32 { (unix_seconds + UTC_OFFSET_SECONDS).rem_euclid(SECONDS_PER_DAY) as u32 }

/// Local seconds since midnight right now. A clock before 1970 reads as midnight.
pub fn local_seconds_of_day() -> u32 {
    let unix = SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |d| d.as_secs() as i64);
    seconds_of_day(unix)
}
