//! DateTime display utilities.
//!
//! Projects store their creation time as epoch milliseconds; these wrappers
//! format it in the system timezone.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats epoch milliseconds as `YYYY-MM-DD HH:MM:SS TZ` in the system
/// timezone.
///
/// Out-of-range values are printed as the raw number.
pub struct LocalDateTime(pub i64);

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Timestamp::from_millisecond(self.0) {
            Ok(timestamp) => write!(
                f,
                "{}",
                timestamp
                    .to_zoned(TimeZone::system())
                    .strftime("%Y-%m-%d %H:%M:%S %Z")
            ),
            Err(_) => write!(f, "{}", self.0),
        }
    }
}

/// Formats epoch milliseconds as a local calendar date (`YYYY-MM-DD`).
pub struct LocalDate(pub i64);

impl fmt::Display for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Timestamp::from_millisecond(self.0) {
            Ok(timestamp) => write!(
                f,
                "{}",
                timestamp.to_zoned(TimeZone::system()).strftime("%Y-%m-%d")
            ),
            Err(_) => write!(f, "{}", self.0),
        }
    }
}
