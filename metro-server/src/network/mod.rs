//! Static network catalog.
//!
//! Loads the line/coordinate description of the transit network once at
//! startup and provides the derived station → lines index used by the
//! planner.

mod catalog;
mod coords;
mod error;
mod index;
mod loader;

pub use catalog::{Network, NetworkBuilder};
pub use coords::{InvalidCoord, parse_coord};
pub use error::{NetworkError, UnknownStation};
pub use index::LineIndex;
