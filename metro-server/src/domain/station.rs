//! Station identity and position types.

use std::fmt;

use serde::Serialize;

/// Error returned when a station name is empty after normalization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name: {reason}")]
pub struct InvalidStationName {
    reason: &'static str,
}

/// A normalized station name.
///
/// Station names are compared case-insensitively everywhere: in the
/// network file, in lookups and in query input. This type stores the
/// canonical form (trimmed, inner whitespace collapsed to single spaces,
/// uppercased), so two `StationName`s are equal exactly when the user
/// would consider them the same station.
///
/// # Examples
///
/// ```
/// use metro_server::domain::StationName;
///
/// let a = StationName::parse("  Rajiv   chowk ").unwrap();
/// let b = StationName::parse("RAJIV CHOWK").unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "RAJIV CHOWK");
///
/// assert!(StationName::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StationName(String);

impl StationName {
    /// Normalize and validate a station name.
    pub fn parse(s: &str) -> Result<Self, InvalidStationName> {
        let normalized = s
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_uppercase();

        if normalized.is_empty() {
            return Err(InvalidStationName {
                reason: "must contain a non-whitespace character",
            });
        }

        Ok(Self(normalized))
    }

    /// Returns the normalized name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationName({})", self.0)
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A position on the schematic plane.
///
/// One unit is 100 km. Coordinates are only ever used to compare
/// candidate routes and to band fares, never as real track distances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another point, in plane units.
    pub fn distance_to(&self, other: &Coord) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}
