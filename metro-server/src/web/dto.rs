//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Line, StationName};
use crate::network::Network;
use crate::planner::Itinerary;

/// Query for a route between two stations.
#[derive(Debug, Default, Deserialize)]
pub struct RouteRequest {
    /// Origin station name (any case)
    pub source: Option<String>,

    /// Destination station name (any case)
    pub destination: Option<String>,
}

/// A resolved route and its fare.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Stations in travel order, origin and destination included
    pub route: Vec<StationName>,

    /// Fare in whole currency units
    pub fare: u32,

    /// Lines ridden, e.g. "Red Line and Blue Line"
    pub lines: String,

    /// Route length in kilometres
    pub distance_km: f64,

    /// Number of stations on the route
    pub stations: usize,

    /// Number of line changes
    pub interchanges: usize,
}

impl RouteResponse {
    /// Create a response from a planner result.
    pub fn from_itinerary(itinerary: Itinerary) -> Self {
        Self {
            fare: itinerary.fare,
            lines: itinerary.route.label.clone(),
            distance_km: itinerary.distance_km,
            stations: itinerary.route.stations.len(),
            interchanges: itinerary.route.interchanges(),
            route: itinerary.route.stations,
        }
    }
}

/// All station names, sorted.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<StationName>,
}

/// A station position for map rendering.
#[derive(Debug, Serialize)]
pub struct StationPoint {
    pub name: StationName,
    pub x: f64,
    pub y: f64,
}

/// A line as drawn on the schematic map.
#[derive(Debug, Serialize)]
pub struct LineMap {
    pub id: u16,
    pub name: String,
    pub colour: String,
    pub stations: Vec<StationPoint>,
}

impl LineMap {
    /// Create a map line, resolving each station's position.
    ///
    /// Stations without a known position are left out.
    pub fn from_line(line: &Line, network: &Network) -> Self {
        let stations = line
            .stations
            .iter()
            .filter_map(|s| {
                network.coord(s).map(|c| StationPoint {
                    name: s.clone(),
                    x: c.x,
                    y: c.y,
                })
            })
            .collect();

        Self {
            id: line.id.0,
            name: line.name.clone(),
            colour: line.colour.clone(),
            stations,
        }
    }
}

/// The routable network, for rendering collaborators.
#[derive(Debug, Serialize)]
pub struct NetworkMapResponse {
    pub lines: Vec<LineMap>,
}

impl NetworkMapResponse {
    /// Create the map from every routable line.
    pub fn from_network(network: &Network) -> Self {
        Self {
            lines: network
                .routable_lines()
                .map(|l| LineMap::from_line(l, network))
                .collect(),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
