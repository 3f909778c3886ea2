//! Domain types for the port route planner.
//!
//! This module contains the validated building blocks the search works
//! on: the minute timeline, ports and weekly sailing schedules. Parsing
//! happens at construction time, so code receiving these types can trust
//! their fields.

mod port;
mod sailing;
mod time;

pub use port::{Coordinates, Port};
pub use sailing::{SailingRecord, ScheduledSailing};
pub use time::{
    CalendarDate, DECEMBER_ANCHOR, DayWindow, MINUTES_PER_DAY, MINUTES_PER_WEEK, Minute, TimeError,
    TimeOfDay, absolute_minute, format_minute,
};
