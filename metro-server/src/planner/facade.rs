//! Planner entry point combining search, distance and fare.

use std::collections::BTreeSet;

use crate::domain::StationName;
use crate::network::{Network, UnknownStation};

use super::config::PlannerConfig;
use super::route::{Itinerary, Route};
use super::search::{Resolver, RouteError};

/// Route planner: the single entry point for route and fare queries.
///
/// Holds only shared references to immutable data, so any number of
/// planners can run concurrently over the same network.
pub struct Planner<'a> {
    network: &'a Network,
    config: &'a PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a Network, config: &'a PlannerConfig) -> Self {
        Self { network, config }
    }

    /// Every station a query may name, sorted for display.
    pub fn station_names(&self) -> BTreeSet<StationName> {
        self.network.all_station_names()
    }

    /// Resolve a route and fare between two stations given by name.
    ///
    /// Names are normalized before lookup. Asking for a route from a station
    /// to itself gives a one-station route with fare 0.
    pub fn resolve(&self, source: &str, destination: &str) -> Result<Itinerary, RouteError> {
        let src = self.station(source)?;
        let dst = self.station(destination)?;
        self.resolve_stations(&src, &dst)
    }

    /// Resolve a route and fare between two normalized stations.
    pub fn resolve_stations(
        &self,
        src: &StationName,
        dst: &StationName,
    ) -> Result<Itinerary, RouteError> {
        for station in [src, dst] {
            if !self.network.contains(station) {
                return Err(UnknownStation(station.to_string()).into());
            }
        }

        let route = if src == dst {
            Route::single(src.clone())
        } else {
            Resolver::new(self.network).resolve(src, dst)?
        };

        let distance_km = self.config.to_km(route.distance);
        let fare = self.config.fare_for_distance(route.distance);

        Ok(Itinerary {
            route,
            distance_km,
            fare,
        })
    }

    fn station(&self, name: &str) -> Result<StationName, RouteError> {
        StationName::parse(name).map_err(|_| UnknownStation(name.to_string()).into())
    }
}
