//! Multi-leg journeys through a list of waypoints.
//!
//! Each consecutive pair of waypoints is one leg, searched with the
//! single-leg planner. The first leg leaves within the chosen start day;
//! every later leg starts from the exact instant the previous one arrived.
//!
//! Reported times and costs are recomputed by walking each returned path,
//! whichever objective the legs were searched with.

use serde::Serialize;
use tracing::{debug, info};

use crate::domain::{DayWindow, Minute, format_minute};
use crate::network::PortId;

use super::layover::{LayoverCharge, layover_charge, layover_days};
use super::search::{Departure, Guidance, Objective, PathResult, Planner};

/// One leg of a planned journey with its recomputed breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedLeg {
    pub path: PathResult,
    /// Departure instant of the first sailing (or the ready instant if the
    /// leg has no sailings).
    pub departs_at: Minute,
    /// Arrival instant at the leg's destination.
    pub arrives_at: Minute,
    /// Sailing and waiting minutes in this leg.
    pub elapsed_minutes: Minute,
    /// Fares plus layover charges in this leg.
    pub cost: i64,
    pub layovers: Vec<LayoverCharge>,
}

/// Why a journey could not be planned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanFailure {
    /// Fewer than two waypoints were given.
    #[error("a journey needs at least 2 waypoints, got {given}")]
    InsufficientWaypoints { given: usize },

    /// A waypoint name does not resolve to a port.
    #[error("unknown port: {name}")]
    UnknownPort { name: String },

    /// One leg has no route.
    #[error("no route for leg {leg} from {from} to {to}")]
    NoPath {
        leg: usize,
        from: String,
        to: String,
    },

    /// The day sweep found no start day with a complete journey.
    #[error("no complete journey on any of {days_tried} start days")]
    NoValidDay { days_tried: u32 },
}

/// Result of planning a multi-leg journey.
///
/// An invalid result has no legs and a zero total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultiLegResult {
    pub legs: Vec<PlannedLeg>,
    pub valid: bool,
    /// 1-based start day the first leg left on.
    pub start_day: u32,
    /// Fares and layover charges over every leg.
    pub total_cost: i64,
    pub failure: Option<PlanFailure>,
}

impl MultiLegResult {
    fn invalid(start_day: u32, failure: PlanFailure) -> Self {
        Self {
            legs: Vec::new(),
            valid: false,
            start_day,
            total_cost: 0,
            failure: Some(failure),
        }
    }

    /// Returns true if every leg has a route.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Elapsed minutes over every leg.
    pub fn total_minutes(&self) -> Minute {
        self.legs.iter().map(|leg| leg.elapsed_minutes).sum()
    }

    /// Departure instant of the whole journey.
    pub fn departs_at(&self) -> Option<Minute> {
        self.legs.first().map(|leg| leg.departs_at)
    }

    /// Arrival instant of the whole journey.
    pub fn arrives_at(&self) -> Option<Minute> {
        self.legs.last().map(|leg| leg.arrives_at)
    }
}

impl Planner<'_> {
    /// Plan a journey through `waypoints`, leaving on `start_day`.
    pub fn plan_journey<S: AsRef<str>>(
        &self,
        waypoints: &[S],
        objective: Objective,
        start_day: u32,
    ) -> MultiLegResult {
        match self.resolve_waypoints(waypoints) {
            Ok(stops) => self.plan_stops(&stops, objective, start_day),
            Err(failure) => MultiLegResult::invalid(start_day, failure),
        }
    }

    /// Try every start day and keep the journey with the least total time.
    ///
    /// Legs are searched with the time objective. The earliest day wins ties.
    pub fn plan_journey_best_day<S: AsRef<str>>(&self, waypoints: &[S]) -> MultiLegResult {
        let stops = match self.resolve_waypoints(waypoints) {
            Ok(stops) => stops,
            Err(failure) => return MultiLegResult::invalid(1, failure),
        };

        let mut best: Option<MultiLegResult> = None;
        for day in 1..=self.config.sweep_days {
            let candidate = self.plan_stops(&stops, Objective::Time, day);
            if !candidate.valid {
                continue;
            }
            debug!(day, minutes = candidate.total_minutes(), "valid start day");
            if best
                .as_ref()
                .is_none_or(|b| candidate.total_minutes() < b.total_minutes())
            {
                best = Some(candidate);
            }
        }

        match best {
            Some(result) => {
                info!(
                    day = result.start_day,
                    minutes = result.total_minutes(),
                    cost = result.total_cost,
                    "best start day chosen"
                );
                result
            }
            None => MultiLegResult::invalid(
                1,
                PlanFailure::NoValidDay {
                    days_tried: self.config.sweep_days,
                },
            ),
        }
    }

    fn resolve_waypoints<S: AsRef<str>>(&self, waypoints: &[S]) -> Result<Vec<PortId>, PlanFailure> {
        if waypoints.len() < 2 {
            return Err(PlanFailure::InsufficientWaypoints {
                given: waypoints.len(),
            });
        }
        waypoints
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.graph
                    .port_id(name)
                    .ok_or_else(|| PlanFailure::UnknownPort {
                        name: name.to_string(),
                    })
            })
            .collect()
    }

    fn plan_stops(&self, stops: &[PortId], objective: Objective, start_day: u32) -> MultiLegResult {
        let window = DayWindow::for_day(self.config.month_anchor, start_day);
        let final_destination = stops[stops.len() - 1];

        let mut legs = Vec::with_capacity(stops.len() - 1);
        let mut total_cost = 0;
        let mut ready = window.start();

        for (leg, pair) in stops.windows(2).enumerate() {
            let (from, to) = (pair[0], pair[1]);
            let departure = if leg == 0 {
                Departure::Window(window)
            } else {
                Departure::After(ready)
            };

            let path = self.search_ids(from, to, objective, Guidance::Plain, departure);
            if path.is_empty() {
                debug!(leg, start_day, "leg has no route");
                return MultiLegResult::invalid(
                    start_day,
                    PlanFailure::NoPath {
                        leg,
                        from: self.graph.port(from).name.clone(),
                        to: self.graph.port(to).name.clone(),
                    },
                );
            }

            let planned = self.recompute_leg(path, leg == 0, ready, final_destination);
            ready = planned.arrives_at;
            total_cost += planned.cost;
            legs.push(planned);
        }

        MultiLegResult {
            legs,
            valid: true,
            start_day,
            total_cost,
            failure: None,
        }
    }

    /// Walk a leg's sailings from `ready`, totting up time and money.
    ///
    /// The very first sailing of the journey counts no wait and no layover.
    /// Layovers are never charged at the journey's final destination.
    fn recompute_leg(
        &self,
        path: PathResult,
        first_leg: bool,
        ready: Minute,
        final_destination: PortId,
    ) -> PlannedLeg {
        let mut clock = ready;
        let mut departs_at = None;
        let mut elapsed = 0;
        let mut cost = 0;
        let mut layovers = Vec::new();

        for (hop, &id) in path.sailings.iter().enumerate() {
            let sailing = self.graph.sailing(id);
            let (dep, arr) = sailing.schedule.next_departure_unbounded(clock);
            let wait = dep - clock;
            let duration = sailing.schedule.duration_minutes();
            departs_at.get_or_insert(dep);
            cost += sailing.cost;

            if first_leg && hop == 0 {
                elapsed += duration;
            } else {
                elapsed += wait + duration;

                let port = self.graph.port(sailing.origin);
                let charge = if sailing.origin == final_destination {
                    0
                } else {
                    layover_charge(
                        wait,
                        port.daily_charge,
                        self.config.layover_threshold_mins,
                    )
                };
                if charge > 0 {
                    debug!(
                        port = %port.name,
                        wait,
                        at = %format_minute(clock),
                        charge,
                        "layover charge"
                    );
                    cost += charge;
                    layovers.push(LayoverCharge {
                        port: sailing.origin,
                        wait_minutes: wait,
                        days: layover_days(wait),
                        charge,
                    });
                }
            }

            clock = arr;
        }

        PlannedLeg {
            path,
            departs_at: departs_at.unwrap_or(ready),
            arrives_at: clock,
            elapsed_minutes: elapsed,
            cost,
            layovers,
        }
    }
}
