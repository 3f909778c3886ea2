//! The port network.
//!
//! Ports are nodes; scheduled sailings are directed edges. Sailings live in
//! one arena and adjacency lists refer to them by [`SailingId`], so the
//! network can be shared read-only between any number of searches.

mod graph;
mod stats;

pub use graph::{Graph, PortId, Sailing, SailingId};
pub use stats::CompanyStats;
