//! Search configuration for the route planner.

use crate::domain::{DECEMBER_ANCHOR, Minute};

/// Configuration parameters for route search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Timeline instant at which start day 1 begins.
    pub month_anchor: Minute,

    /// Start days tried by the best-day sweep (1..=sweep_days).
    pub sweep_days: u32,

    /// Waits longer than this (minutes) at an intermediate port are
    /// charged the port's daily fee.
    pub layover_threshold_mins: Minute,

    /// How many weekly recurrences a relaxation may skip ahead when the
    /// anchor departure has already gone.
    pub recurrence_cycles: u32,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        month_anchor: Minute,
        sweep_days: u32,
        layover_threshold_mins: Minute,
        recurrence_cycles: u32,
    ) -> Self {
        Self {
            month_anchor,
            sweep_days,
            layover_threshold_mins,
            recurrence_cycles,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            month_anchor: DECEMBER_ANCHOR,
            sweep_days: 31,
            layover_threshold_mins: 720, // 12 hours
            recurrence_cycles: 1,
        }
    }
}
