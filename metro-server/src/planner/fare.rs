//! Distance-banded fares.

/// Error returned when constructing an invalid fare table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid fare table: {reason}")]
pub struct InvalidFareTable {
    reason: &'static str,
}

/// One band: journeys up to and including `up_to_km` cost `fare`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FareBand {
    pub up_to_km: f64,
    pub fare: u32,
}

/// Maps a journey length in kilometres to a flat fare.
///
/// Bands are closed on their upper bound: a journey of exactly 2 km falls
/// in the "up to 2 km" band. A zero-length journey is free. Anything longer
/// than the last band costs `beyond`.
///
/// # Examples
///
/// ```
/// use metro_server::planner::FareTable;
///
/// let fares = FareTable::default();
/// assert_eq!(fares.fare_for(0.0), 0);
/// assert_eq!(fares.fare_for(2.0), 10);
/// assert_eq!(fares.fare_for(2.01), 20);
/// assert_eq!(fares.fare_for(100.0), 60);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FareTable {
    bands: Vec<FareBand>,
    beyond: u32,
}

impl FareTable {
    /// Create a fare table.
    ///
    /// Band limits must be finite, positive and strictly increasing.
    pub fn new(bands: Vec<FareBand>, beyond: u32) -> Result<Self, InvalidFareTable> {
        let mut previous = 0.0;
        for band in &bands {
            if !band.up_to_km.is_finite() {
                return Err(InvalidFareTable {
                    reason: "band limits must be finite",
                });
            }
            if band.up_to_km <= previous {
                return Err(InvalidFareTable {
                    reason: "band limits must be positive and strictly increasing",
                });
            }
            previous = band.up_to_km;
        }

        Ok(Self { bands, beyond })
    }

    /// The fare for a journey of `km` kilometres.
    pub fn fare_for(&self, km: f64) -> u32 {
        if km <= 0.0 {
            return 0;
        }

        self.bands
            .iter()
            .find(|band| km <= band.up_to_km)
            .map_or(self.beyond, |band| band.fare)
    }

    /// The configured bands, shortest first.
    pub fn bands(&self) -> &[FareBand] {
        &self.bands
    }

    /// The fare charged past the last band.
    pub fn beyond(&self) -> u32 {
        self.beyond
    }
}

impl Default for FareTable {
    fn default() -> Self {
        let band = |up_to_km: f64, fare: u32| FareBand { up_to_km, fare };
        Self {
            bands: vec![
                band(2.0, 10),
                band(5.0, 20),
                band(12.0, 30),
                band(21.0, 40),
                band(32.0, 50),
            ],
            beyond: 60,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Longer journeys never cost less
        #[test]
        fn fare_is_monotonic(a in 0.0f64..100.0, b in 0.0f64..100.0) {
            let fares = FareTable::default();
            let (short, long) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(fares.fare_for(short) <= fares.fare_for(long));
        }

        /// Every positive distance inside one band gets that band's fare
        #[test]
        fn same_band_same_fare(lo in 2.0001f64..5.0, hi in 2.0001f64..5.0) {
            let fares = FareTable::default();
            prop_assert_eq!(fares.fare_for(lo), fares.fare_for(hi));
            prop_assert_eq!(fares.fare_for(lo), 20);
        }

        /// Fares always come from the table
        #[test]
        fn fare_is_a_known_amount(km in 0.0f64..1e6) {
            let fares = FareTable::default();
            let fare = fares.fare_for(km);
            prop_assert!([0, 10, 20, 30, 40, 50, 60].contains(&fare));
        }
    }
}
