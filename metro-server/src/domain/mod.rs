//! Domain types for the metro route planner.
//!
//! These types represent validated network data. Station names are
//! normalized at construction, so code holding a `StationName` can compare
//! it directly without worrying about case or spacing.

mod line;
mod station;

pub use line::{Line, LineId};
pub use station::{Coord, InvalidStationName, StationName};
