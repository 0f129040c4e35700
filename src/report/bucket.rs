use std::str::FromStr;

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use thiserror::Error;

/// Supported fixed-offset report timezones.
///
/// Bucketing is purely instant-plus-offset with no daylight-saving rules
/// or timezone-database lookup; this enum is the only place in the crate
/// where zone knowledge exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// Japan Standard Time, fixed UTC+9:00.
    Jst,
    /// Indochina Time, fixed UTC+7:00.
    Ict,
}

/// Raised for a timezone tag the report does not support.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown timezone tag {0:?} (expected \"jst\" or \"ict\")")]
pub struct ZoneError(String);

impl Zone {
    /// Offset from UTC in whole hours.
    pub const fn offset_hours(self) -> i64 {
        match self {
            Self::Jst => 9,
            Self::Ict => 7,
        }
    }

    /// Canonical tag accepted on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Jst => "jst",
            Self::Ict => "ict",
        }
    }

    /// Shifts a UTC instant by the fixed offset and truncates to the
    /// calendar date component.
    pub fn bucket_date(self, instant: DateTime<Utc>) -> NaiveDate {
        (instant + TimeDelta::hours(self.offset_hours())).date_naive()
    }
}

impl FromStr for Zone {
    type Err = ZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jst" => Ok(Self::Jst),
            "ict" => Ok(Self::Ict),
            other => Err(ZoneError(other.to_string())),
        }
    }
}
