//! Per-company overview of the network.

use std::collections::BTreeSet;

use serde::Serialize;

use super::graph::{Graph, PortId};
use crate::domain::Minute;

/// Aggregate figures over a set of sailings.
///
/// All fields are zero when no sailing matches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyStats {
    /// `None` means every company.
    pub company: Option<String>,
    pub routes: usize,
    pub min_cost: i64,
    pub max_cost: i64,
    pub average_cost: f64,
    pub min_duration_minutes: Minute,
    pub max_duration_minutes: Minute,
    /// Distinct ports appearing as an origin or destination.
    pub ports: usize,
}

impl Graph {
    /// Distinct operating companies, in order of first appearance.
    pub fn companies(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for sailing in self.sailings() {
            let company = sailing.schedule.company();
            if !seen.contains(&company) {
                seen.push(company);
            }
        }
        seen
    }

    /// Statistics for one company's sailings, or for all when `company` is `None`.
    pub fn company_stats(&self, company: Option<&str>) -> CompanyStats {
        let matching: Vec<_> = self
            .sailings()
            .iter()
            .filter(|s| company.is_none_or(|c| s.schedule.company() == c))
            .collect();

        let ports: BTreeSet<PortId> = matching
            .iter()
            .flat_map(|s| [s.origin, s.destination])
            .collect();

        let costs = matching.iter().map(|s| s.cost);
        let durations = matching.iter().map(|s| s.schedule.duration_minutes());
        let total: i64 = costs.clone().sum();

        CompanyStats {
            company: company.map(str::to_string),
            routes: matching.len(),
            min_cost: costs.clone().min().unwrap_or(0),
            max_cost: costs.max().unwrap_or(0),
            average_cost: if matching.is_empty() {
                0.0
            } else {
                total as f64 / matching.len() as f64
            },
            min_duration_minutes: durations.clone().min().unwrap_or(0),
            max_duration_minutes: durations.max().unwrap_or(0),
            ports: ports.len(),
        }
    }
}
