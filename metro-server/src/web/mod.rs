//! Web layer for the metro route planner.
//!
//! Provides HTTP endpoints for listing stations, resolving routes and
//! fares, and describing the network for map rendering.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
