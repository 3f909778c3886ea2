//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::format_minute;
use crate::network::{Graph, Sailing};
use crate::planner::{LayoverCharge, MultiLegResult, Objective, PathResult, PlannedLeg};

/// A port in the network listing.
#[derive(Debug, Serialize)]
pub struct PortResult {
    pub name: String,

    /// Docking charge per started day
    pub daily_charge: i64,

    pub x: f64,
    pub y: f64,

    /// Number of sailings leaving this port
    pub outgoing: usize,
}

/// Response listing every port.
#[derive(Debug, Serialize)]
pub struct PortsResponse {
    pub ports: Vec<PortResult>,
}

impl PortsResponse {
    pub fn from_graph(graph: &Graph) -> Self {
        let ports = graph
            .port_ids()
            .map(|id| {
                let port = graph.port(id);
                PortResult {
                    name: port.name.clone(),
                    daily_charge: port.daily_charge,
                    x: port.coordinates.x,
                    y: port.coordinates.y,
                    outgoing: graph.outgoing_count(id),
                }
            })
            .collect();
        Self { ports }
    }
}

/// Response listing operating companies.
#[derive(Debug, Serialize)]
pub struct CompaniesResponse {
    pub companies: Vec<String>,
}

/// Query for company statistics.
#[derive(Debug, Deserialize)]
pub struct CompanyStatsRequest {
    /// Company name; all companies if absent
    pub company: Option<String>,
}

/// Query for a single-leg route.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    pub origin: String,
    pub destination: String,

    /// `cost` or `time` (defaults to `cost`)
    pub objective: Option<String>,

    /// Rank by map distance as well (time objective only)
    #[serde(default)]
    pub guided: bool,

    /// 1-based start day (defaults to 1)
    pub day: Option<u32>,
}

/// One sailing in a route.
#[derive(Debug, PartialEq, Serialize)]
pub struct SailingResult {
    pub from: String,
    pub to: String,
    pub company: String,

    /// Reference departure date (D/M/YYYY)
    pub date: String,

    /// Scheduled departure time (HH:MM)
    pub departure: String,

    /// Scheduled arrival time (HH:MM)
    pub arrival: String,

    pub cost: i64,
    pub duration_mins: i64,

    /// Whether the sailing arrives the following day
    pub overnight: bool,
}

impl SailingResult {
    pub fn from_sailing(graph: &Graph, sailing: &Sailing) -> Self {
        let schedule = &sailing.schedule;
        Self {
            from: graph.port(sailing.origin).name.clone(),
            to: graph.port(sailing.destination).name.clone(),
            company: schedule.company().to_string(),
            date: schedule.date().to_string(),
            departure: schedule.departure_time().to_string(),
            arrival: schedule.arrival_time().to_string(),
            cost: sailing.cost,
            duration_mins: schedule.duration_minutes(),
            overnight: schedule.is_overnight(),
        }
    }
}

fn sailing_results(graph: &Graph, path: &PathResult) -> Vec<SailingResult> {
    path.sailings
        .iter()
        .map(|&id| SailingResult::from_sailing(graph, graph.sailing(id)))
        .collect()
}

/// Response for a single-leg route search.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Whether any route exists
    pub found: bool,

    pub objective: Objective,

    /// Port names from origin to destination
    pub ports: Vec<String>,

    pub sailings: Vec<SailingResult>,

    /// Total cost or minutes, depending on the objective
    pub metric: i64,
}

impl RouteResponse {
    pub fn from_path(graph: &Graph, path: &PathResult, objective: Objective) -> Self {
        Self {
            found: !path.is_empty(),
            objective,
            ports: graph.names(&path.ports),
            sailings: sailing_results(graph, path),
            metric: path.metric,
        }
    }
}

/// Request to plan a multi-leg journey.
#[derive(Debug, Deserialize)]
pub struct PlanJourneyRequest {
    /// Port names to visit in order
    pub waypoints: Vec<String>,

    /// `cost` or `time` (defaults to `cost`); ignored by the day sweep
    pub objective: Option<String>,

    /// 1-based start day; when absent every day is tried
    pub day: Option<u32>,
}

/// A charged layover.
#[derive(Debug, PartialEq, Serialize)]
pub struct LayoverResult {
    pub port: String,
    pub wait_mins: i64,
    pub days: i64,
    pub charge: i64,
}

impl LayoverResult {
    pub fn from_charge(graph: &Graph, charge: &LayoverCharge) -> Self {
        Self {
            port: graph.port(charge.port).name.clone(),
            wait_mins: charge.wait_minutes,
            days: charge.days,
            charge: charge.charge,
        }
    }
}

/// One leg of a planned journey.
#[derive(Debug, Serialize)]
pub struct LegResult {
    pub ports: Vec<String>,
    pub sailings: Vec<SailingResult>,

    /// Departure instant (D/M HH:MM)
    pub departs_at: String,

    /// Arrival instant (D/M HH:MM)
    pub arrives_at: String,

    pub elapsed_mins: i64,
    pub cost: i64,
    pub layovers: Vec<LayoverResult>,
}

impl LegResult {
    pub fn from_leg(graph: &Graph, leg: &PlannedLeg) -> Self {
        Self {
            ports: graph.names(&leg.path.ports),
            sailings: sailing_results(graph, &leg.path),
            departs_at: format_minute(leg.departs_at),
            arrives_at: format_minute(leg.arrives_at),
            elapsed_mins: leg.elapsed_minutes,
            cost: leg.cost,
            layovers: leg
                .layovers
                .iter()
                .map(|c| LayoverResult::from_charge(graph, c))
                .collect(),
        }
    }
}

/// Response for journey planning.
#[derive(Debug, Serialize)]
pub struct PlanJourneyResponse {
    pub valid: bool,
    pub start_day: u32,
    pub total_cost: i64,
    pub total_mins: i64,
    pub legs: Vec<LegResult>,

    /// Why the journey could not be planned
    pub failure: Option<String>,
}

impl PlanJourneyResponse {
    pub fn from_result(graph: &Graph, result: &MultiLegResult) -> Self {
        Self {
            valid: result.is_valid(),
            start_day: result.start_day,
            total_cost: result.total_cost,
            total_mins: result.total_minutes(),
            legs: result
                .legs
                .iter()
                .map(|leg| LegResult::from_leg(graph, leg))
                .collect(),
            failure: result.failure.as_ref().map(ToString::to_string),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
