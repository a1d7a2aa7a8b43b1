//! Wall-clock time value type and minute arithmetic.
//!
//! Clocking devices report times with at most minute precision that matters
//! for payroll, so [`TimeOfDay`] drops seconds on construction. The type has
//! no date component; day-crossing is always resolved relative to a shift by
//! the calculation layer, never stored in the value itself.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// A wall-clock time with minute resolution.
///
/// Immutable value type. Ordering is plain wall-clock ordering; comparing
/// times across a midnight boundary is the job of
/// [`ShiftTimeline`](crate::calculation::ShiftTimeline).
///
/// # Example
///
/// ```
/// use timeclock_engine::models::TimeOfDay;
///
/// let t = TimeOfDay::parse("09:10:42").unwrap();
/// assert_eq!(t.to_string(), "09:10"); // seconds dropped
/// assert_eq!(t.minute_of_day(), 550);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Creates a time of day from an hour and minute.
    ///
    /// Returns `None` when `hour > 23` or `minute > 59`.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Parses a single time token, tolerantly.
    ///
    /// Accepts `"H:MM"`, `"HH:MM"` and `"HH:MM:SS"` (seconds are dropped).
    /// Returns `None` for anything unparseable or out of range; dirty device
    /// exports make unparseable cells an expected condition, not an error.
    ///
    /// # Example
    ///
    /// ```
    /// use timeclock_engine::models::TimeOfDay;
    ///
    /// assert_eq!(TimeOfDay::parse(" 9:05 ").unwrap().to_string(), "09:05");
    /// assert!(TimeOfDay::parse("25:00").is_none());
    /// assert!(TimeOfDay::parse("").is_none());
    /// ```
    pub fn parse(token: &str) -> Option<Self> {
        let mut parts = token.trim().split(':');
        let hour: u32 = parts.next()?.trim().parse().ok()?;
        let minute: u32 = parts.next()?.trim().parse().ok()?;
        if let Some(seconds) = parts.next() {
            // Seconds are validated then discarded.
            let s: u32 = seconds.trim().parse().ok()?;
            if s > 59 {
                return None;
            }
        }
        if parts.next().is_some() {
            return None;
        }
        Self::new(hour, minute)
    }

    /// Creates a time of day from a minute offset, wrapping past midnight.
    pub fn from_minute_of_day(minutes: u32) -> Self {
        let m = minutes % MINUTES_PER_DAY;
        Self(NaiveTime::from_hms_opt(m / 60, m % 60, 0).expect("minute in range"))
    }

    /// Returns the hour component (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute component (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Returns the minute-of-day (0-1439).
    pub fn minute_of_day(&self) -> u32 {
        self.0.hour() * 60 + self.0.minute()
    }

    /// Adds a (possibly negative) number of minutes, wrapping past midnight.
    ///
    /// # Example
    ///
    /// ```
    /// use timeclock_engine::models::TimeOfDay;
    ///
    /// let t = TimeOfDay::new(23, 45).unwrap();
    /// assert_eq!(t.add_minutes(30).to_string(), "00:15");
    /// assert_eq!(t.add_minutes(-60).to_string(), "22:45");
    /// ```
    pub fn add_minutes(&self, minutes: i64) -> Self {
        let m = (self.minute_of_day() as i64 + minutes).rem_euclid(MINUTES_PER_DAY as i64);
        Self::from_minute_of_day(m as u32)
    }
}

/// Returns the minutes from `start` to `end` on a fixed reference day.
///
/// When `end` is numerically before `start` the end is assumed to fall on the
/// following day, so at most one midnight crossing is representable. A shift
/// longer than 24 hours cannot be expressed with wall-clock times alone.
///
/// # Example
///
/// ```
/// use timeclock_engine::models::{minutes_between, TimeOfDay};
///
/// let entry = TimeOfDay::new(22, 0).unwrap();
/// let exit = TimeOfDay::new(2, 0).unwrap();
/// assert_eq!(minutes_between(entry, exit), 240);
/// assert_eq!(minutes_between(exit, exit), 0);
/// ```
pub fn minutes_between(start: TimeOfDay, end: TimeOfDay) -> u32 {
    let s = start.minute_of_day();
    let e = end.minute_of_day();
    if e < s { e + MINUTES_PER_DAY - s } else { e - s }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| EngineError::InvalidTime {
            value: s.to_string(),
        })
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
