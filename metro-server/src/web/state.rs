//! Application state for the web layer.

use std::sync::Arc;

use crate::network::Network;
use crate::planner::PlannerConfig;

/// Shared application state.
///
/// The network is loaded once at startup and never changes, so handlers
/// share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// The loaded metro network
    pub network: Arc<Network>,

    /// Distance scaling and fare table
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: Network, config: PlannerConfig) -> Self {
        Self {
            network: Arc::new(network),
            config: Arc::new(config),
        }
    }
}
