//! Port records.

use serde::{Deserialize, Serialize};

/// Display coordinates of a port.
///
/// Only the guided time search and external renderers read these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

impl Coordinates {
    /// Create coordinates from components.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another point.
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A port in the network.
///
/// Ports are identified by name. The daily charge is levied for each
/// started day of a long layover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Port {
    /// Unique port name (case-sensitive).
    pub name: String,

    /// Docking charge per started day; never negative.
    pub daily_charge: i64,

    /// Position on the display map.
    #[serde(default)]
    pub coordinates: Coordinates,
}

impl Port {
    /// Create a new port.
    pub fn new(name: impl Into<String>, daily_charge: i64, coordinates: Coordinates) -> Self {
        Self {
            name: name.into(),
            daily_charge,
            coordinates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn coordinates_default_when_missing() {
        let port: Port = serde_json::from_str(r#"{"name":"Oslo","daily_charge":300}"#).unwrap();
        assert_eq!(port, Port::new("Oslo", 300, Coordinates::default()));
    }
}
