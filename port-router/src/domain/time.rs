//! Timeline handling for scheduled sailings.
//!
//! Schedules give dates as `D/M/YYYY` strings and clock times as `HH:MM`
//! strings. The search compares instants on a single linear timeline of
//! whole minutes counted from midnight on 1 January, so this module turns
//! calendar values into [`Minute`]s and back.
//!
//! Day counting treats every year as a leap year: February always has 29
//! days and the year field never contributes to the count.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// An absolute instant on the search timeline, in minutes since the epoch.
pub type Minute = i64;

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: Minute = 1440;

/// Minutes in one week. Scheduled sailings recur with this period.
pub const MINUTES_PER_WEEK: Minute = 7 * MINUTES_PER_DAY;

/// Start of 1 December on the timeline (335 elapsed days).
pub const DECEMBER_ANCHOR: Minute = 335 * MINUTES_PER_DAY;

/// Any leap year works; it only fixes the month lengths used for day counts.
const LEAP_REFERENCE_YEAR: i32 = 2024;

/// Error returned when a temporal field cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    /// Clock time is not `HH:MM` with hour 0-23 and minute 0-59.
    #[error("malformed time {input:?}: {reason}")]
    MalformedTime { input: String, reason: &'static str },

    /// Date is not `D/M/YYYY` naming a real day of a leap year.
    #[error("malformed date {input:?}: {reason}")]
    MalformedDate { input: String, reason: &'static str },
}

impl TimeError {
    fn time(input: &str, reason: &'static str) -> Self {
        Self::MalformedTime {
            input: input.to_string(),
            reason,
        }
    }

    fn date(input: &str, reason: &'static str) -> Self {
        Self::MalformedDate {
            input: input.to_string(),
            reason,
        }
    }
}

/// A clock time, stored as minutes since midnight.
///
/// # Examples
///
/// ```
/// use port_router::domain::TimeOfDay;
///
/// let t = TimeOfDay::parse("14:30").unwrap();
/// assert_eq!(t.minutes(), 870);
/// assert_eq!(t.to_string(), "14:30");
///
/// assert!(TimeOfDay::parse("1430").is_err());
/// assert!(TimeOfDay::parse("24:00").is_err());
/// assert!(TimeOfDay::parse("12:60").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Builds a time from hour and minute, if both are in range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self((hour * 60 + minute) as u16))
    }

    /// Parse a time from `HH:MM` format.
    ///
    /// Each field holds one or two ASCII digits; both must be in range.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let (hh, mm) = s
            .split_once(':')
            .ok_or_else(|| TimeError::time(s, "expected HH:MM format"))?;

        let hour = parse_digits(hh, 2).ok_or_else(|| TimeError::time(s, "invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::time(s, "hour must be 0-23"));
        }

        let minute =
            parse_digits(mm, 2).ok_or_else(|| TimeError::time(s, "invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::time(s, "minute must be 0-59"));
        }

        Ok(Self((hour * 60 + minute) as u16))
    }

    /// Minutes since midnight (0..1440).
    pub fn minutes(self) -> Minute {
        Minute::from(self.0)
    }

    /// Returns the hour (0-23).
    pub fn hour(self) -> u32 {
        u32::from(self.0) / 60
    }

    /// Returns the minute (0-59).
    pub fn minute(self) -> u32 {
        u32::from(self.0) % 60
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// A calendar date as written in schedules.
///
/// Validity is checked against a leap year, so `29/2/2023` is accepted
/// while `30/2/2024` and `31/4/2024` are not.
///
/// # Examples
///
/// ```
/// use port_router::domain::CalendarDate;
///
/// let d = CalendarDate::parse("5/12/2024").unwrap();
/// assert_eq!((d.day(), d.month(), d.year()), (5, 12, 2024));
/// assert_eq!(CalendarDate::parse("05/12/2024").unwrap(), d);
/// assert!(CalendarDate::parse("2024-12-05").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CalendarDate {
    day: u32,
    month: u32,
    year: i32,
    #[serde(skip)]
    day_of_year: u32,
}

impl CalendarDate {
    /// Builds a date, checking that the day exists in that month of a leap year.
    pub fn from_dmy(day: u32, month: u32, year: i32) -> Option<Self> {
        let reference = NaiveDate::from_ymd_opt(LEAP_REFERENCE_YEAR, month, day)?;
        Some(Self {
            day,
            month,
            year,
            day_of_year: reference.ordinal0(),
        })
    }

    /// Parse a date from `D/M/YYYY` or `DD/MM/YYYY` format.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let mut fields = s.split('/');
        let (Some(d), Some(m), Some(y), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(TimeError::date(s, "expected D/M/YYYY format"));
        };

        let day = parse_digits(d, 2).ok_or_else(|| TimeError::date(s, "invalid day digits"))?;
        let month = parse_digits(m, 2).ok_or_else(|| TimeError::date(s, "invalid month digits"))?;
        if y.len() != 4 {
            return Err(TimeError::date(s, "year must have four digits"));
        }
        let year = parse_digits(y, 4).ok_or_else(|| TimeError::date(s, "invalid year digits"))?;

        Self::from_dmy(day, month, year as i32)
            .ok_or_else(|| TimeError::date(s, "day does not exist in month"))
    }

    /// Day of the month (1-based).
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Month of the year (1-based).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Year as written. It does not affect timeline positions.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Whole days elapsed since 1 January.
    pub fn days_since_epoch(&self) -> Minute {
        Minute::from(self.day_of_year)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month, self.year)
    }
}

/// Maps a date and a time of day (in minutes) onto the timeline.
///
/// # Examples
///
/// ```
/// use port_router::domain::{CalendarDate, absolute_minute, DECEMBER_ANCHOR};
///
/// let first = CalendarDate::parse("1/1/2024").unwrap();
/// assert_eq!(absolute_minute(first, 90), 90);
///
/// let december = CalendarDate::parse("1/12/2024").unwrap();
/// assert_eq!(absolute_minute(december, 0), DECEMBER_ANCHOR);
/// ```
pub fn absolute_minute(date: CalendarDate, minutes_of_day: Minute) -> Minute {
    date.days_since_epoch() * MINUTES_PER_DAY + minutes_of_day
}

/// Renders a timeline instant as `D/M HH:MM`.
///
/// Instants past the end of the reference year are shown as a day count.
pub fn format_minute(instant: Minute) -> String {
    let days = instant.div_euclid(MINUTES_PER_DAY);
    let within_day = instant.rem_euclid(MINUTES_PER_DAY);
    let (hour, minute) = (within_day / 60, within_day % 60);

    let date = u32::try_from(days + 1)
        .ok()
        .and_then(|ordinal| NaiveDate::from_yo_opt(LEAP_REFERENCE_YEAR, ordinal));

    match date {
        Some(date) => format!(
            "{}/{} {:02}:{:02}",
            date.day(),
            date.month(),
            hour,
            minute
        ),
        None => format!("day {} {:02}:{:02}", days, hour, minute),
    }
}

/// The 24-hour span in which a first leg's origin departures are allowed.
///
/// Half-open: `start` is inside the window, `end` is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayWindow {
    start: Minute,
    end: Minute,
}

impl DayWindow {
    /// Window for a 1-based start day counted from `anchor`.
    ///
    /// # Examples
    ///
    /// ```
    /// use port_router::domain::{DayWindow, DECEMBER_ANCHOR};
    ///
    /// let w = DayWindow::for_day(DECEMBER_ANCHOR, 2);
    /// assert_eq!(w.start(), DECEMBER_ANCHOR + 1440);
    /// assert!(w.contains(DECEMBER_ANCHOR + 1440));
    /// assert!(!w.contains(DECEMBER_ANCHOR + 2880));
    /// ```
    pub fn for_day(anchor: Minute, day: u32) -> Self {
        let start = anchor + (Minute::from(day) - 1) * MINUTES_PER_DAY;
        Self {
            start,
            end: start + MINUTES_PER_DAY,
        }
    }

    /// First minute of the window.
    pub fn start(&self) -> Minute {
        self.start
    }

    /// First minute after the window.
    pub fn end(&self) -> Minute {
        self.end
    }

    /// Returns true if the instant falls inside the window.
    pub fn contains(&self, instant: Minute) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// Parse a field of 1..=`max_len` ASCII digits.
fn parse_digits(s: &str, max_len: usize) -> Option<u32> {
    if s.is_empty() || s.len() > max_len || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any in-range clock time parses to hour * 60 + minute.
        #[test]
        fn time_parses_to_minutes(h in 0u32..24, m in 0u32..60) {
            let t = TimeOfDay::parse(&format!("{:02}:{:02}", h, m)).unwrap();
            prop_assert_eq!(t.minutes(), Minute::from(h * 60 + m));
            prop_assert_eq!(Some(t), TimeOfDay::from_hm(h, m));
        }

        /// Out-of-range hours are always rejected.
        #[test]
        fn hour_out_of_range_rejected(h in 24u32..100, m in 0u32..60) {
            let is_malformed = matches!(
                TimeOfDay::parse(&format!("{}:{:02}", h, m)),
                Err(TimeError::MalformedTime { .. })
            );
            prop_assert!(is_malformed);
        }

        /// Consecutive days in one month are exactly one day apart.
        #[test]
        fn consecutive_days_are_1440_apart(day in 1u32..28, month in 1u32..=12, t in 0i64..1440) {
            let a = CalendarDate::from_dmy(day, month, 2024).unwrap();
            let b = CalendarDate::from_dmy(day + 1, month, 2024).unwrap();
            prop_assert_eq!(absolute_minute(b, t) - absolute_minute(a, t), MINUTES_PER_DAY);
        }

        /// Every window covers exactly one day and its days tile the month.
        #[test]
        fn windows_tile_the_timeline(day in 1u32..=31) {
            let w = DayWindow::for_day(DECEMBER_ANCHOR, day);
            let next = DayWindow::for_day(DECEMBER_ANCHOR, day + 1);
            prop_assert_eq!(w.end() - w.start(), MINUTES_PER_DAY);
            prop_assert_eq!(w.end(), next.start());
        }
    }
}
