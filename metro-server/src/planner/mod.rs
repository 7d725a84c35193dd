//! Route and fare planner.
//!
//! This module implements the core question the service answers:
//! "Which stations do I pass through from here to there, and what does
//! it cost?"
//!
//! Routes use at most two line changes and are chosen by their length on
//! the network's schematic plane; that same length, scaled to kilometres,
//! selects the fare band.

mod config;
mod distance;
mod facade;
mod fare;
mod route;
mod search;

pub use config::{DEFAULT_KM_PER_UNIT, PlannerConfig};
pub use distance::total_distance;
pub use facade::Planner;
pub use fare::{FareBand, FareTable, InvalidFareTable};
pub use route::{Itinerary, Route};
pub use search::RouteError;
