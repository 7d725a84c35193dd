//! Route length on the schematic plane.
//!
//! The sum of straight-line hops between consecutive stations. It stands
//! in for travel distance when choosing between candidate routes and when
//! banding fares; it is not a track distance.

use crate::domain::StationName;
use crate::network::{Network, UnknownStation};

/// Total length of a route in plane units.
///
/// A route of zero or one station has length 0. Fails if a station has no
/// known position.
pub fn total_distance(network: &Network, route: &[StationName]) -> Result<f64, UnknownStation> {
    let positions = route
        .iter()
        .map(|s| network.coord(s).ok_or_else(|| UnknownStation(s.to_string())))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(positions
        .windows(2)
        .map(|pair| pair[0].distance_to(&pair[1]))
        .sum())
}
