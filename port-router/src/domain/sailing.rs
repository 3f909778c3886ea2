//! Scheduled sailings.
//!
//! A sailing is published once, with a reference date, but runs every
//! week at the same time. [`ScheduledSailing`] holds the parsed schedule
//! and derives its anchor instants on the timeline.

use serde::{Deserialize, Serialize};

use super::time::{
    CalendarDate, MINUTES_PER_DAY, MINUTES_PER_WEEK, Minute, TimeError, TimeOfDay, absolute_minute,
};

/// A sailing as supplied by a loader, before any parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SailingRecord {
    pub origin: String,
    pub destination: String,
    /// Reference departure date, `D/M/YYYY`.
    pub date: String,
    /// Departure clock time, `HH:MM`.
    pub departure: String,
    /// Arrival clock time, `HH:MM`.
    pub arrival: String,
    pub cost: i64,
    pub company: String,
}

/// The timetable of one weekly sailing.
///
/// # Examples
///
/// ```
/// use port_router::domain::ScheduledSailing;
///
/// // Overnight: arrives the following day
/// let s = ScheduledSailing::parse("1/12/2024", "22:00", "06:00", "MSC").unwrap();
/// assert_eq!(s.duration_minutes(), 480);
/// assert_eq!(s.anchor_arrival() - s.anchor_departure(), 480);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledSailing {
    date: CalendarDate,
    departure: TimeOfDay,
    arrival: TimeOfDay,
    company: String,
}

impl ScheduledSailing {
    /// Create a schedule from parsed parts.
    pub fn new(
        date: CalendarDate,
        departure: TimeOfDay,
        arrival: TimeOfDay,
        company: impl Into<String>,
    ) -> Self {
        Self {
            date,
            departure,
            arrival,
            company: company.into(),
        }
    }

    /// Parse a schedule from its textual fields.
    pub fn parse(date: &str, departure: &str, arrival: &str, company: &str) -> Result<Self, TimeError> {
        Ok(Self::new(
            CalendarDate::parse(date)?,
            TimeOfDay::parse(departure)?,
            TimeOfDay::parse(arrival)?,
            company,
        ))
    }

    /// Parse the schedule part of a loader record.
    pub fn from_record(record: &SailingRecord) -> Result<Self, TimeError> {
        Self::parse(
            &record.date,
            &record.departure,
            &record.arrival,
            &record.company,
        )
    }

    /// Reference departure date.
    pub fn date(&self) -> CalendarDate {
        self.date
    }

    /// Departure clock time.
    pub fn departure_time(&self) -> TimeOfDay {
        self.departure
    }

    /// Arrival clock time.
    pub fn arrival_time(&self) -> TimeOfDay {
        self.arrival
    }

    /// Operating company.
    pub fn company(&self) -> &str {
        &self.company
    }

    /// Returns true if the arrival clock time is earlier than departure.
    pub fn is_overnight(&self) -> bool {
        self.arrival < self.departure
    }

    /// Minutes at sea.
    pub fn duration_minutes(&self) -> Minute {
        let diff = self.arrival.minutes() - self.departure.minutes();
        if diff < 0 { diff + MINUTES_PER_DAY } else { diff }
    }

    /// The reference departure instant.
    pub fn anchor_departure(&self) -> Minute {
        absolute_minute(self.date, self.departure.minutes())
    }

    /// The reference arrival instant, corrected for overnight sailings.
    pub fn anchor_arrival(&self) -> Minute {
        let raw = absolute_minute(self.date, self.arrival.minutes());
        if self.is_overnight() {
            raw + MINUTES_PER_DAY
        } else {
            raw
        }
    }

    /// Earliest departure at or after `ready`, searching at most `max_cycles`
    /// weeks past the anchor.
    ///
    /// Returns `(departure, arrival)` or `None` if the cap is too small.
    ///
    /// # Examples
    ///
    /// ```
    /// use port_router::domain::ScheduledSailing;
    ///
    /// let s = ScheduledSailing::parse("1/12/2024", "10:00", "12:00", "ONE").unwrap();
    /// let anchor = s.anchor_departure();
    ///
    /// assert_eq!(s.next_departure(anchor - 5, 1), Some((anchor, anchor + 120)));
    /// assert_eq!(s.next_departure(anchor + 5000, 1), Some((anchor + 10080, anchor + 10200)));
    /// assert_eq!(s.next_departure(anchor + 15000, 1), None);
    /// ```
    pub fn next_departure(&self, ready: Minute, max_cycles: u32) -> Option<(Minute, Minute)> {
        let mut departure = self.anchor_departure();
        let mut arrival = self.anchor_arrival();
        let mut cycles = 0;

        while departure < ready && cycles < max_cycles {
            departure += MINUTES_PER_WEEK;
            arrival += MINUTES_PER_WEEK;
            cycles += 1;
        }

        (departure >= ready).then_some((departure, arrival))
    }

    /// Earliest departure at or after `ready`, however many weeks ahead.
    pub fn next_departure_unbounded(&self, ready: Minute) -> (Minute, Minute) {
        let departure = self.anchor_departure();
        let weeks = if departure < ready {
            ready
                .saturating_sub(departure)
                .saturating_add(MINUTES_PER_WEEK - 1)
                / MINUTES_PER_WEEK
        } else {
            0
        };
        let shift = weeks.saturating_mul(MINUTES_PER_WEEK);
        (
            departure.saturating_add(shift),
            self.anchor_arrival().saturating_add(shift),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DECEMBER_ANCHOR;

    fn sailing(dep: &str, arr: &str) -> ScheduledSailing {
        ScheduledSailing::parse("1/12/2024", dep, arr, "Maersk").unwrap()
    }

    #[test]
    fn daytime_sailing_instants() {
        let s = sailing("08:00", "20:30");
        assert!(!s.is_overnight());
        assert_eq!(s.anchor_departure(), DECEMBER_ANCHOR + 480);
        assert_eq!(s.anchor_arrival(), DECEMBER_ANCHOR + 1230);
        assert_eq!(s.duration_minutes(), 750);
    }

    #[test]
    fn overnight_sailing_arrives_next_day() {
        let s = sailing("23:00", "01:15");
        assert!(s.is_overnight());
        assert_eq!(s.anchor_arrival(), DECEMBER_ANCHOR + 1440 + 75);
        assert_eq!(s.duration_minutes(), 135);
    }

    #[test]
    fn equal_clock_times_take_no_time() {
        let s = sailing("10:00", "10:00");
        assert_eq!(s.duration_minutes(), 0);
        assert_eq!(s.anchor_arrival(), s.anchor_departure());
    }

    #[test]
    fn from_record_reports_bad_fields() {
        let record = SailingRecord {
            origin: "Oslo".into(),
            destination: "Hamburg".into(),
            date: "1/12/2024".into(),
            departure: "8am".into(),
            arrival: "12:00".into(),
            cost: 100,
            company: "MSC".into(),
        };
        assert!(matches!(
            ScheduledSailing::from_record(&record),
            Err(TimeError::MalformedTime { .. })
        ));

        let record = SailingRecord {
            date: "40/12/2024".into(),
            departure: "08:00".into(),
            ..record
        };
        assert!(matches!(
            ScheduledSailing::from_record(&record),
            Err(TimeError::MalformedDate { .. })
        ));
    }

    #[test]
    fn next_departure_without_cycling() {
        let s = sailing("10:00", "12:00");
        let anchor = s.anchor_departure();
        assert_eq!(s.next_departure(anchor, 0), Some((anchor, anchor + 120)));
        assert_eq!(s.next_departure(anchor + 1, 0), None);
    }

    #[test]
    fn next_departure_respects_cycle_cap() {
        let s = sailing("10:00", "12:00");
        let anchor = s.anchor_departure();
        assert_eq!(s.next_departure(anchor + 15_000, 1), None);
        assert_eq!(
            s.next_departure(anchor + 15_000, 2),
            Some((anchor + 2 * MINUTES_PER_WEEK, anchor + 2 * MINUTES_PER_WEEK + 120))
        );
    }

    #[test]
    fn unbounded_departure_finds_first_feasible_week() {
        let s = sailing("10:00", "12:00");
        let anchor = s.anchor_departure();
        assert_eq!(s.next_departure_unbounded(anchor - 100), (anchor, anchor + 120));
        assert_eq!(
            s.next_departure_unbounded(anchor + MINUTES_PER_WEEK),
            (anchor + MINUTES_PER_WEEK, anchor + MINUTES_PER_WEEK + 120)
        );
        assert_eq!(
            s.next_departure_unbounded(anchor + 3 * MINUTES_PER_WEEK + 1).0,
            anchor + 4 * MINUTES_PER_WEEK
        );
    }

    #[test]
    fn unbounded_departure_at_timeline_extremes() {
        let s = sailing("10:00", "12:00");
        let anchor = s.anchor_departure();
        assert_eq!(s.next_departure_unbounded(Minute::MIN), (anchor, anchor + 120));
        assert_eq!(s.next_departure_unbounded(Minute::MAX).0, Minute::MAX);
        assert_eq!(s.next_departure(Minute::MIN, 1), Some((anchor, anchor + 120)));
        assert_eq!(s.next_departure(Minute::MAX, 1), None);
    }
}
