//! Wall-clock arithmetic -- `HH:MM` strings to minutes-since-midnight and back.
//!
//! Every comparison and every piece of interval math in the engine goes through
//! [`WallClock`], an integer minute count in `0..=1439`. Strings are only
//! parsed at the edges (JSON input, CLI flags) and formatted on the way out.
//!
//! There is no day rollover: anything past `23:59` clamps to `23:59`, anything
//! before `00:00` clamps to `00:00`.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TimeblockError};

/// Width of one grid slot in minutes.
pub const SLOT_MINUTES: u32 = 15;

/// Last representable minute of the day (`23:59`).
pub const LAST_MINUTE: u32 = 24 * 60 - 1;

/// A time of day with no date or timezone, stored as minutes since midnight.
///
/// Parses from `HH:MM` or `HH:MM:SS` (seconds are ignored) and always
/// formats as zero-padded `HH:MM`, so `Display` output is safe to compare
/// lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WallClock(u16);

impl WallClock {
    /// `23:59`, the latest time the engine can express.
    pub const END_OF_DAY: WallClock = WallClock(LAST_MINUTE as u16);

    /// Build a time from an hour and a minute, rejecting out-of-range parts.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(TimeblockError::InvalidFormat(format!(
                "{:02}:{:02}",
                hour, minute
            )));
        }
        Ok(WallClock((hour * 60 + minute) as u16))
    }

    /// Build a time from a minute count, clamping it into `00:00..=23:59`.
    pub fn from_minutes(minutes: i64) -> Self {
        WallClock(minutes.clamp(0, LAST_MINUTE as i64) as u16)
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u32 {
        u32::from(self.0)
    }

    pub fn hour(self) -> u32 {
        self.minutes() / 60
    }

    pub fn minute(self) -> u32 {
        self.minutes() % 60
    }

    /// Shift by `minutes` (which may be negative), clamped to the day.
    pub fn add_minutes(self, minutes: i64) -> Self {
        WallClock::from_minutes(i64::from(self.0) + minutes)
    }

    /// Signed number of minutes from `self` to `end`. Negative when `end`
    /// is earlier in the day.
    pub fn minutes_until(self, end: WallClock) -> i64 {
        i64::from(end.0) - i64::from(self.0)
    }

    /// Round to a slot boundary: floor when `round_up` is false, ceiling
    /// otherwise. A time already on a boundary is returned unchanged.
    pub fn round_to_slot(self, round_up: bool) -> Self {
        let minutes = self.minutes();
        let remainder = minutes % SLOT_MINUTES;
        if remainder == 0 {
            return self;
        }
        let rounded = if round_up {
            minutes - remainder + SLOT_MINUTES
        } else {
            minutes - remainder
        };
        WallClock::from_minutes(i64::from(rounded))
    }
}

impl fmt::Display for WallClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for WallClock {
    type Err = TimeblockError;

    fn from_str(s: &str) -> Result<Self> {
        if !is_fixed_width(s) {
            return Err(TimeblockError::InvalidFormat(s.to_string()));
        }
        let parsed = NaiveTime::parse_from_str(s, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
            .map_err(|_| TimeblockError::InvalidFormat(s.to_string()))?;
        WallClock::from_hm(parsed.hour(), parsed.minute())
    }
}

/// `HH:MM` or `HH:MM:SS`, digits zero-padded. chrono alone would also take
/// `9:5` or a leading space.
fn is_fixed_width(s: &str) -> bool {
    let bytes = s.as_bytes();
    let pair_at = |i: usize| bytes[i].is_ascii_digit() && bytes[i + 1].is_ascii_digit();
    match bytes.len() {
        5 => pair_at(0) && bytes[2] == b':' && pair_at(3),
        8 => pair_at(0) && bytes[2] == b':' && pair_at(3) && bytes[5] == b':' && pair_at(6),
        _ => false,
    }
}

impl TryFrom<String> for WallClock {
    type Error = TimeblockError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<WallClock> for String {
    fn from(value: WallClock) -> Self {
        value.to_string()
    }
}

/// Parse `HH:MM` (or `HH:MM:SS`) into minutes since midnight.
///
/// # Errors
/// Returns `TimeblockError::InvalidFormat` unless the input is zero-padded
/// `HH:MM` / `HH:MM:SS` with the hour in `0..=23` and the minute in `0..=59`.
/// Malformed input is never clamped.
pub fn time_to_minutes(time: &str) -> Result<u32> {
    time.parse::<WallClock>().map(WallClock::minutes)
}

/// Format minutes since midnight as `HH:MM`, clamping into `00:00..=23:59`.
///
/// `1440` becomes `23:59`, not `00:00` of the next day.
pub fn minutes_to_time(minutes: i64) -> String {
    WallClock::from_minutes(minutes).to_string()
}

/// Minutes from `start` to `end`. Negative when `end` is before `start`;
/// callers that need a forward interval must check the sign themselves.
pub fn duration_minutes(start: &str, end: &str) -> Result<i64> {
    let start: WallClock = start.parse()?;
    let end: WallClock = end.parse()?;
    Ok(start.minutes_until(end))
}

/// Add `minutes` to `time`, clamped to `23:59` (and `00:00` for negative shifts).
pub fn add_duration(time: &str, minutes: i64) -> Result<String> {
    let time: WallClock = time.parse()?;
    Ok(time.add_minutes(minutes).to_string())
}

/// Round `time` down (`round_up = false`) or up (`round_up = true`) to the
/// nearest 15-minute boundary.
pub fn round_to_slot(time: &str, round_up: bool) -> Result<String> {
    let time: WallClock = time.parse()?;
    Ok(time.round_to_slot(round_up).to_string())
}

/// Number of grid slots needed to cover `duration_minutes`.
pub fn ceil_slots(duration_minutes: u32) -> usize {
    duration_minutes.div_ceil(SLOT_MINUTES) as usize
}
