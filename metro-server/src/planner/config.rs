//! Planner configuration.

use super::fare::FareTable;

/// Kilometres per unit of the schematic coordinate plane.
pub const DEFAULT_KM_PER_UNIT: f64 = 100.0;

/// Kilometre values are rounded to this many steps per km, so float noise
/// from summed segments cannot push a band-edge distance into the next band.
const KM_STEPS: f64 = 1e9;

/// Configuration parameters for route planning and fares.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Scale from coordinate-plane units to kilometres.
    pub km_per_unit: f64,

    /// Fare bands applied to the scaled route length.
    pub fares: FareTable,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(km_per_unit: f64, fares: FareTable) -> Self {
        Self { km_per_unit, fares }
    }

    /// Convert a distance on the coordinate plane to kilometres.
    pub fn to_km(&self, units: f64) -> f64 {
        (units * self.km_per_unit * KM_STEPS).round() / KM_STEPS
    }

    /// The fare for a route of the given length in plane units.
    pub fn fare_for_distance(&self, units: f64) -> u32 {
        self.fares.fare_for(self.to_km(units))
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            km_per_unit: DEFAULT_KM_PER_UNIT,
            fares: FareTable::default(),
        }
    }
}
