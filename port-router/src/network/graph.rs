//! Adjacency-list graph of ports and sailings.

use std::fmt;

use serde::Serialize;
use tracing::trace;

use crate::domain::{Port, ScheduledSailing};

/// Index of a port in a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PortId(pub usize);

/// Index of a sailing in a [`Graph`]'s sailing arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SailingId(pub usize);

/// A directed edge: one weekly sailing between two ports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sailing {
    pub origin: PortId,
    pub destination: PortId,
    /// Fare for this sailing; never negative.
    pub cost: i64,
    pub schedule: ScheduledSailing,
}

/// The port network.
///
/// Ports keep their insertion order, and so do the outgoing sailings of
/// each port. Searches iterate in that order.
///
/// # Examples
///
/// ```
/// use port_router::domain::{Coordinates, Port, ScheduledSailing};
/// use port_router::network::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_port(Port::new("Oslo", 300, Coordinates::default()));
/// graph.add_port(Port::new("Hamburg", 450, Coordinates::default()));
///
/// let schedule = ScheduledSailing::parse("1/12/2024", "08:00", "20:00", "MSC").unwrap();
/// assert!(graph.add_sailing("Oslo", "Hamburg", 900, schedule.clone()).is_some());
///
/// // Unknown ports are dropped without error
/// assert!(graph.add_sailing("Oslo", "Atlantis", 900, schedule).is_none());
/// assert_eq!(graph.sailing_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    ports: Vec<Port>,
    sailings: Vec<Sailing>,
    outgoing: Vec<Vec<SailingId>>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a port with no outgoing sailings.
    pub fn add_port(&mut self, port: Port) -> PortId {
        let id = PortId(self.ports.len());
        self.ports.push(port);
        self.outgoing.push(Vec::new());
        id
    }

    /// Add a sailing between two named ports.
    ///
    /// If either name does not resolve the sailing is dropped and `None` is
    /// returned. Inconsistent schedule data is tolerated this way.
    ///
    /// `cost` must not be negative: searches rely on metrics never
    /// decreasing along a path. The loader rejects such lines before they
    /// get here.
    pub fn add_sailing(
        &mut self,
        origin: &str,
        destination: &str,
        cost: i64,
        schedule: ScheduledSailing,
    ) -> Option<SailingId> {
        debug_assert!(cost >= 0, "negative fare {cost} for {origin} -> {destination}");
        let (Some(from), Some(to)) = (self.port_id(origin), self.port_id(destination)) else {
            trace!(origin, destination, "dropping sailing with unknown port");
            return None;
        };

        let id = SailingId(self.sailings.len());
        self.sailings.push(Sailing {
            origin: from,
            destination: to,
            cost,
            schedule,
        });
        self.outgoing[from.0].push(id);
        Some(id)
    }

    /// Look up a port by exact, case-sensitive name.
    ///
    /// If several ports share a name the first one wins.
    pub fn port_id(&self, name: &str) -> Option<PortId> {
        self.ports.iter().position(|p| p.name == name).map(PortId)
    }

    /// Returns the port with the given id.
    ///
    /// # Panics
    ///
    /// Panics if the id did not come from this graph.
    pub fn port(&self, id: PortId) -> &Port {
        &self.ports[id.0]
    }

    /// Returns the sailing with the given id.
    ///
    /// # Panics
    ///
    /// Panics if the id did not come from this graph.
    pub fn sailing(&self, id: SailingId) -> &Sailing {
        &self.sailings[id.0]
    }

    /// All ports in insertion order.
    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    /// All sailings in insertion order.
    pub fn sailings(&self) -> &[Sailing] {
        &self.sailings
    }

    /// Ids of every port.
    pub fn port_ids(&self) -> impl Iterator<Item = PortId> + '_ {
        (0..self.ports.len()).map(PortId)
    }

    /// Sailings leaving a port, in insertion order.
    pub fn outgoing(&self, port: PortId) -> impl Iterator<Item = (SailingId, &Sailing)> + '_ {
        self.outgoing[port.0]
            .iter()
            .map(|&id| (id, &self.sailings[id.0]))
    }

    /// Number of sailings leaving a port.
    pub fn outgoing_count(&self, port: PortId) -> usize {
        self.outgoing[port.0].len()
    }

    /// Returns the number of ports.
    pub fn port_count(&self) -> usize {
        self.ports.len()
    }

    /// Returns the number of sailings.
    pub fn sailing_count(&self) -> usize {
        self.sailings.len()
    }

    /// Returns true if there are no ports.
    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    /// Port names for a sequence of ids.
    pub fn names(&self, ids: &[PortId]) -> Vec<String> {
        ids.iter().map(|&id| self.port(id).name.clone()).collect()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for id in self.port_ids() {
            write!(f, "Port [{}] connects to:", self.port(id).name)?;
            if self.outgoing_count(id) == 0 {
                write!(f, " (no outgoing routes)")?;
            }
            for (_, sailing) in self.outgoing(id) {
                write!(
                    f,
                    " -> {} (${})",
                    self.port(sailing.destination).name,
                    sailing.cost
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
