//! Docking charges for long waits between sailings.
//!
//! A traveller waiting longer than the threshold at an intermediate port
//! pays that port's daily charge for every started day of the wait.

use serde::Serialize;

use crate::domain::{MINUTES_PER_DAY, Minute};
use crate::network::PortId;

/// One charged layover within a planned leg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoverCharge {
    pub port: PortId,
    pub wait_minutes: Minute,
    pub days: i64,
    pub charge: i64,
}

/// Started days in a wait.
pub fn layover_days(wait: Minute) -> i64 {
    (wait + MINUTES_PER_DAY - 1).div_euclid(MINUTES_PER_DAY)
}

/// Charge for waiting `wait` minutes at a port costing `daily_charge` per day.
///
/// Waits up to and including `threshold` are free.
///
/// # Examples
///
/// ```
/// use port_router::planner::layover_charge;
///
/// assert_eq!(layover_charge(720, 500, 720), 0);
/// assert_eq!(layover_charge(721, 500, 720), 500);
/// assert_eq!(layover_charge(1441, 500, 720), 1000);
/// ```
pub fn layover_charge(wait: Minute, daily_charge: i64, threshold: Minute) -> i64 {
    if wait <= threshold {
        return 0;
    }
    layover_days(wait) * daily_charge
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: Minute = 720;

    #[test]
    fn twelve_hours_is_free() {
        assert_eq!(layover_charge(0, 500, THRESHOLD), 0);
        assert_eq!(layover_charge(720, 500, THRESHOLD), 0);
    }

    #[test]
    fn just_over_twelve_hours_is_one_day() {
        assert_eq!(layover_charge(721, 500, THRESHOLD), 500);
        assert_eq!(layover_charge(1440, 500, THRESHOLD), 500);
    }

    #[test]
    fn started_days_are_charged_in_full() {
        assert_eq!(layover_charge(1441, 500, THRESHOLD), 1000);
        assert_eq!(layover_charge(2880, 500, THRESHOLD), 1000);
        assert_eq!(layover_charge(2881, 500, THRESHOLD), 1500);
    }

    #[test]
    fn free_port_never_charges() {
        assert_eq!(layover_charge(10_000, 0, THRESHOLD), 0);
    }

    #[test]
    fn days_round_up() {
        assert_eq!(layover_days(1), 1);
        assert_eq!(layover_days(1440), 1);
        assert_eq!(layover_days(1441), 2);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The charge is a whole number of days covering the wait.
        #[test]
        fn charge_covers_wait(wait in 721i64..100_000, daily in 1i64..10_000) {
            let charge = layover_charge(wait, daily, THRESHOLD);
            let days = charge / daily;
            prop_assert_eq!(charge % daily, 0);
            prop_assert!(days * MINUTES_PER_DAY >= wait);
            prop_assert!((days - 1) * MINUTES_PER_DAY < wait);
        }

        /// Longer waits never cost less.
        #[test]
        fn charge_is_monotone(wait in 0i64..100_000, extra in 0i64..5_000, daily in 0i64..10_000) {
            prop_assert!(
                layover_charge(wait + extra, daily, THRESHOLD) >= layover_charge(wait, daily, THRESHOLD)
            );
        }
    }

    const THRESHOLD: Minute = 720;
}
