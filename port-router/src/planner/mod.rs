//! Route planner over weekly-recurring sailings.
//!
//! This module implements the core search that answers: "what is the
//! cheapest (or fastest) way from this port to that one, leaving on this
//! day?" and chains such searches across a list of waypoints.
//!
//! The single-leg search is a label-setting shortest path over an implicit
//! time-expanded graph; the journey planner runs one search per leg and
//! can sweep every start day in the month.

mod config;
mod frontier;
mod journey;
mod layover;
mod search;


pub use config::SearchConfig;
pub use journey::{MultiLegResult, PlanFailure, PlannedLeg};
pub use layover::{LayoverCharge, layover_charge, layover_days};
pub use search::{Departure, Guidance, Objective, PathResult, Planner};
