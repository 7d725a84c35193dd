//! Route and itinerary result types.

use crate::domain::{LineId, StationName};

/// A resolved station-to-station route.
///
/// # Invariants
///
/// - Routes from the planner have at least one station
/// - `lines` holds one entry per line ridden, in travel order
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Stations from origin to destination, both inclusive.
    pub stations: Vec<StationName>,

    /// Lines ridden, in order.
    pub lines: Vec<LineId>,

    /// Human-readable description of the lines, e.g. "Red Line and Blue Line".
    pub label: String,

    /// Length on the schematic plane.
    pub distance: f64,
}

impl Route {
    /// A route that starts and ends at the same station.
    pub fn single(station: StationName) -> Self {
        Self {
            stations: vec![station],
            lines: Vec::new(),
            label: String::new(),
            distance: 0.0,
        }
    }

    /// The first station, or `None` for a hand-built empty route.
    pub fn origin(&self) -> Option<&StationName> {
        self.stations.first()
    }

    /// The last station, or `None` for a hand-built empty route.
    pub fn destination(&self) -> Option<&StationName> {
        self.stations.last()
    }

    /// Number of line changes.
    pub fn interchanges(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }
}

/// A route together with its fare.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    pub route: Route,

    /// Route length in kilometres.
    pub distance_km: f64,

    pub fare: u32,
}

/// Join line names the way a person would say them:
/// "A", "A and B", "A, B and C".
pub(crate) fn describe_lines(names: &[&str]) -> String {
    match names {
        [] => String::new(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}
