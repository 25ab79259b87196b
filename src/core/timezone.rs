//! Timezone policy shared by filter boundaries and stored row timestamps.
//!
//! Wall-clock values (a widget selection, a row timestamp whose UTC marker has
//! been stripped) carry no offset. The policy names the zone they are read in,
//! so both sides of a comparison land on the same epoch value.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, Local, LocalResult, NaiveDateTime, TimeDelta, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimezonePolicy {
    /// System local time (`local`)
    #[default]
    Local,
    /// Coordinated universal time (`utc`)
    Utc,
    /// Fixed offset such as `+02:00` or `-0530`
    Fixed(FixedOffset),
}

impl TimezonePolicy {
    /// Epoch milliseconds of a wall-clock value read in this zone.
    pub fn to_epoch_millis(&self, naive: &NaiveDateTime) -> i64 {
        match self {
            TimezonePolicy::Local => wall_clock_millis(&Local, naive),
            TimezonePolicy::Utc => naive.and_utc().timestamp_millis(),
            TimezonePolicy::Fixed(offset) => wall_clock_millis(offset, naive),
        }
    }

    /// Wall-clock value of an epoch instant as seen in this zone.
    pub fn to_wall_clock(&self, millis: i64) -> Option<NaiveDateTime> {
        let utc = DateTime::<Utc>::from_timestamp_millis(millis)?;
        Some(match self {
            TimezonePolicy::Local => utc.with_timezone(&Local).naive_local(),
            TimezonePolicy::Utc => utc.naive_utc(),
            TimezonePolicy::Fixed(offset) => utc.with_timezone(offset).naive_local(),
        })
    }
}

// Ambiguous wall-clock times (DST fall-back) resolve to the earlier instant;
// skipped ones (DST spring-forward) move forward by the length of the gap.
fn wall_clock_millis<Tz: TimeZone>(tz: &Tz, naive: &NaiveDateTime) -> i64 {
    match tz.from_local_datetime(naive) {
        LocalResult::Single(dt) => dt.timestamp_millis(),
        LocalResult::Ambiguous(earliest, _) => earliest.timestamp_millis(),
        LocalResult::None => {
            let shifted = *naive + TimeDelta::hours(1);
            tz.from_local_datetime(&shifted)
                .earliest()
                .map(|dt| dt.timestamp_millis())
                .unwrap_or_else(|| naive.and_utc().timestamp_millis())
        }
    }
}

fn parse_offset(s: &str) -> AppResult<FixedOffset> {
    let invalid = || AppError::InvalidTimezone(s.to_string());

    let (sign, rest) = match s.as_bytes().first() {
        Some(b'+') => (1, &s[1..]),
        Some(b'-') => (-1, &s[1..]),
        _ => return Err(invalid()),
    };

    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let hours: i32 = digits[0..2].parse().map_err(|_| invalid())?;
    let minutes: i32 = digits[2..4].parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

impl FromStr for TimezonePolicy {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(TimezonePolicy::Local),
            "utc" | "z" => Ok(TimezonePolicy::Utc),
            _ => parse_offset(s).map(TimezonePolicy::Fixed),
        }
    }
}

impl TryFrom<String> for TimezonePolicy {
    type Error = AppError;

    fn try_from(s: String) -> AppResult<Self> {
        s.parse()
    }
}

impl From<TimezonePolicy> for String {
    fn from(tz: TimezonePolicy) -> Self {
        tz.to_string()
    }
}

impl fmt::Display for TimezonePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimezonePolicy::Local => write!(f, "local"),
            TimezonePolicy::Utc => write!(f, "utc"),
            TimezonePolicy::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}
