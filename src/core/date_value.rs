//! Date-like values as they reach the core: either a wall-clock value coming
//! from the input widget, or text as stored in a grid cell.

use crate::core::timezone::TimezonePolicy;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical text form used when a wall-clock value is written back out.
pub const CANONICAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Trailing designator of a UTC timestamp (`2021-03-01T10:00:00Z`).
pub const UTC_MARKER: [char; 2] = ['Z', 'z'];

/// Accepted wall-clock layouts. `%.f` also matches an absent fraction.
const WALL_CLOCK_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DateValue {
    WallClock(NaiveDateTime),
    Text(String),
}

/// A parsed date-like value, before it is pinned to the epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Moment {
    /// No offset information: read in the configured timezone
    WallClock(NaiveDateTime),
    /// Explicit offset: already an absolute instant
    Absolute(DateTime<FixedOffset>),
}

impl Moment {
    pub fn epoch_millis(&self, tz: &TimezonePolicy) -> i64 {
        match self {
            Moment::WallClock(naive) => tz.to_epoch_millis(naive),
            Moment::Absolute(dt) => dt.timestamp_millis(),
        }
    }

    /// Wall-clock reading of this moment in the given zone.
    pub fn wall_clock(&self, tz: &TimezonePolicy) -> Option<NaiveDateTime> {
        match self {
            Moment::WallClock(naive) => Some(*naive),
            Moment::Absolute(dt) => tz.to_wall_clock(dt.timestamp_millis()),
        }
    }
}

/// Parse a wall-clock timestamp without offset (`YYYY-MM-DD[THH:MM[:SS[.fff]]]`).
pub fn parse_wall_clock(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    for fmt in WALL_CLOCK_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Parse any supported text form: wall-clock first, then RFC 3339 with offset.
pub fn parse_moment(s: &str) -> Option<Moment> {
    if let Some(naive) = parse_wall_clock(s) {
        return Some(Moment::WallClock(naive));
    }

    DateTime::parse_from_rfc3339(s.trim())
        .ok()
        .map(Moment::Absolute)
}

/// Remove a single trailing UTC marker, if present.
pub fn strip_utc_marker(s: &str) -> &str {
    let s = s.trim_end();
    s.strip_suffix(UTC_MARKER).unwrap_or(s)
}

impl DateValue {
    /// Parse as-is: a trailing marker keeps its UTC meaning.
    pub fn to_moment(&self) -> AppResult<Moment> {
        match self {
            DateValue::WallClock(naive) => Ok(Moment::WallClock(*naive)),
            DateValue::Text(s) => {
                parse_moment(s).ok_or_else(|| AppError::InvalidTimestamp(s.clone()))
            }
        }
    }

    /// Parse with the UTC marker stripped, so the value reads as wall-clock time.
    pub fn to_stripped_moment(&self) -> AppResult<Moment> {
        match self {
            DateValue::WallClock(naive) => Ok(Moment::WallClock(*naive)),
            DateValue::Text(s) => parse_moment(strip_utc_marker(s))
                .ok_or_else(|| AppError::InvalidTimestamp(s.clone())),
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, DateValue::Text(s) if s.trim().is_empty())
    }
}

impl From<NaiveDateTime> for DateValue {
    fn from(naive: NaiveDateTime) -> Self {
        DateValue::WallClock(naive)
    }
}

impl From<String> for DateValue {
    fn from(s: String) -> Self {
        DateValue::Text(s)
    }
}

impl From<&str> for DateValue {
    fn from(s: &str) -> Self {
        DateValue::Text(s.to_string())
    }
}

impl From<DateValue> for String {
    fn from(v: DateValue) -> Self {
        v.to_string()
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateValue::WallClock(naive) => write!(f, "{}", naive.format(CANONICAL_FORMAT)),
            DateValue::Text(s) => f.write_str(s),
        }
    }
}
