//! Time-dependent single-leg route search.
//!
//! Finds the best way from one port to another over weekly-recurring
//! sailings. The search is label-setting over an implicit time-expanded
//! graph: a sailing can only be boarded at one of its recurring departure
//! instants at or after the moment the traveller reaches its origin port.
//!
//! Two independent switches pick the variant:
//! - [`Objective`]: minimise fare (plus layover charges) or elapsed time.
//! - [`Guidance`]: plain search, or ranking by an added straight-line
//!   distance heuristic. The heuristic only applies to the time objective.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::domain::{DayWindow, Minute};
use crate::network::{Graph, PortId, Sailing, SailingId};

use super::config::SearchConfig;
use super::frontier::Frontier;
use super::layover::layover_charge;

/// What the search minimises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Objective {
    /// Fares plus layover charges.
    Cost,
    /// Minutes at sea plus minutes waiting.
    Time,
}

/// How the frontier ranks candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Guidance {
    /// Rank by metric alone.
    #[default]
    Plain,
    /// Rank by metric plus map distance to the destination.
    Guided,
}

/// When the traveller may leave the origin port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Departure {
    /// Leave on a sailing whose reference departure falls inside the window.
    /// Origin sailings are not shifted by weekly recurrence.
    Window(DayWindow),
    /// Ready at this instant; every sailing follows the recurrence rule.
    After(Minute),
}

impl Departure {
    /// The instant the traveller is considered present at the origin.
    pub fn ready_at(&self) -> Minute {
        match self {
            Departure::Window(window) => window.start(),
            Departure::After(instant) => *instant,
        }
    }
}

/// Result of a single-leg search.
///
/// `ports` runs from origin to destination inclusive and `sailings[i]`
/// connects `ports[i]` to `ports[i + 1]`. Both are empty when no route
/// exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    pub ports: Vec<PortId>,
    pub sailings: Vec<SailingId>,
    /// Accumulated cost or minutes, depending on the objective.
    pub metric: i64,
}

impl PathResult {
    /// A result meaning "no route".
    pub fn empty() -> Self {
        Self {
            ports: Vec::new(),
            sailings: Vec::new(),
            metric: 0,
        }
    }

    /// Returns true if no route was found.
    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    /// First port of the route.
    pub fn origin(&self) -> Option<PortId> {
        self.ports.first().copied()
    }

    /// Last port of the route.
    pub fn destination(&self) -> Option<PortId> {
        self.ports.last().copied()
    }

    /// Number of sailings taken.
    pub fn hop_count(&self) -> usize {
        self.sailings.len()
    }
}

/// Per-port search bookkeeping.
#[derive(Debug, Clone, Copy)]
struct Label {
    metric: i64,
    arrival: Minute,
    predecessor: Option<(PortId, SailingId)>,
    settled: bool,
}

impl Label {
    const UNREACHED: Label = Label {
        metric: i64::MAX,
        arrival: Minute::MAX,
        predecessor: None,
        settled: false,
    };
}

/// Route planner over a port network.
///
/// The planner only borrows the graph, so any number of planners can
/// search the same network at once. Every search allocates its own labels.
pub struct Planner<'a> {
    pub(super) graph: &'a Graph,
    pub(super) config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(graph: &'a Graph, config: &'a SearchConfig) -> Self {
        Self { graph, config }
    }

    /// Best route leaving `origin` during the given 1-based start day.
    ///
    /// Unknown port names give an empty result.
    pub fn find_path(
        &self,
        origin: &str,
        destination: &str,
        objective: Objective,
        guidance: Guidance,
        start_day: u32,
    ) -> PathResult {
        let window = DayWindow::for_day(self.config.month_anchor, start_day);
        self.search(
            origin,
            destination,
            objective,
            guidance,
            Departure::Window(window),
        )
    }

    /// Best route for a traveller ready at `origin` from instant `ready`.
    ///
    /// Used to continue a journey from where the previous leg arrived.
    pub fn find_path_from(
        &self,
        origin: &str,
        destination: &str,
        objective: Objective,
        guidance: Guidance,
        ready: Minute,
    ) -> PathResult {
        self.search(
            origin,
            destination,
            objective,
            guidance,
            Departure::After(ready),
        )
    }

    /// Search between two named ports.
    pub fn search(
        &self,
        origin: &str,
        destination: &str,
        objective: Objective,
        guidance: Guidance,
        departure: Departure,
    ) -> PathResult {
        match (self.graph.port_id(origin), self.graph.port_id(destination)) {
            (Some(from), Some(to)) => self.search_ids(from, to, objective, guidance, departure),
            _ => {
                debug!(origin, destination, "search with unknown port");
                PathResult::empty()
            }
        }
    }

    /// Search between two port ids.
    pub fn search_ids(
        &self,
        origin: PortId,
        destination: PortId,
        objective: Objective,
        guidance: Guidance,
        departure: Departure,
    ) -> PathResult {
        if origin == destination {
            return PathResult {
                ports: vec![origin],
                sailings: Vec::new(),
                metric: 0,
            };
        }

        let mut labels = vec![Label::UNREACHED; self.graph.port_count()];
        labels[origin.0].metric = 0;
        labels[origin.0].arrival = departure.ready_at();

        let mut frontier = Frontier::new();
        frontier.push(
            origin,
            0,
            self.heuristic(objective, guidance, origin, destination),
        );

        let mut settled = 0usize;

        while let Some(entry) = frontier.pop() {
            let u = entry.port;
            if labels[u.0].settled {
                continue;
            }
            labels[u.0].settled = true;
            settled += 1;

            if u == destination {
                break;
            }

            let Label {
                metric: base,
                arrival: ready,
                ..
            } = labels[u.0];
            trace!(port = u.0, metric = entry.metric, ready, "settled");

            for (id, sailing) in self.graph.outgoing(u) {
                let v = sailing.destination;
                if labels[v.0].settled {
                    continue;
                }

                let Some((dep, arr)) = self.usable_departure(sailing, u == origin, departure, ready)
                else {
                    continue;
                };

                let wait = dep.saturating_sub(ready).max(0);
                let weight = self.edge_weight(objective, sailing, wait, origin, destination);
                let candidate = base + weight;

                if candidate < labels[v.0].metric {
                    labels[v.0] = Label {
                        metric: candidate,
                        arrival: arr,
                        predecessor: Some((u, id)),
                        settled: false,
                    };
                    let estimate =
                        candidate as f64 + self.heuristic(objective, guidance, v, destination);
                    frontier.push(v, candidate, estimate);
                }
            }
        }

        let result = reconstruct(&labels, origin, destination);
        debug!(
            origin = origin.0,
            destination = destination.0,
            ?objective,
            ?guidance,
            settled,
            unexplored = frontier.len(),
            found = !result.is_empty(),
            metric = result.metric,
            "single-leg search finished"
        );
        result
    }

    /// The departure and arrival instants usable for a sailing, if any.
    fn usable_departure(
        &self,
        sailing: &Sailing,
        from_origin: bool,
        departure: Departure,
        ready: Minute,
    ) -> Option<(Minute, Minute)> {
        match departure {
            Departure::Window(window) if from_origin => {
                let dep = sailing.schedule.anchor_departure();
                window
                    .contains(dep)
                    .then(|| (dep, sailing.schedule.anchor_arrival()))
            }
            _ => sailing
                .schedule
                .next_departure(ready, self.config.recurrence_cycles),
        }
    }

    /// Relaxation weight of taking `sailing` after waiting `wait` minutes.
    ///
    /// Waits at the origin are free under the time objective, and layover
    /// charges never apply at the origin or destination.
    pub fn edge_weight(
        &self,
        objective: Objective,
        sailing: &Sailing,
        wait: Minute,
        origin: PortId,
        destination: PortId,
    ) -> i64 {
        let tail = sailing.origin;
        match objective {
            Objective::Cost => {
                let charge = if tail == origin || tail == destination {
                    0
                } else {
                    layover_charge(
                        wait,
                        self.graph.port(tail).daily_charge,
                        self.config.layover_threshold_mins,
                    )
                };
                sailing.cost + charge
            }
            Objective::Time => {
                let waited = if tail == origin { 0 } else { wait };
                waited + sailing.schedule.duration_minutes()
            }
        }
    }

    fn heuristic(
        &self,
        objective: Objective,
        guidance: Guidance,
        port: PortId,
        destination: PortId,
    ) -> f64 {
        match (objective, guidance) {
            (Objective::Time, Guidance::Guided) => self
                .graph
                .port(port)
                .coordinates
                .distance_to(&self.graph.port(destination).coordinates),
            _ => 0.0,
        }
    }
}

/// Walk predecessors back from the destination.
fn reconstruct(labels: &[Label], origin: PortId, destination: PortId) -> PathResult {
    if labels[destination.0].predecessor.is_none() && origin != destination {
        return PathResult::empty();
    }

    let mut ports = vec![destination];
    let mut sailings = Vec::new();
    let mut current = destination;
    while let Some((prev, sailing)) = labels[current.0].predecessor {
        ports.push(prev);
        sailings.push(sailing);
        current = prev;
    }
    ports.reverse();
    sailings.reverse();

    PathResult {
        ports,
        sailings,
        metric: labels[destination.0].metric,
    }
}
