use metro_server::config::ServerConfig;
use metro_server::network::Network;
use metro_server::planner::PlannerConfig;
use metro_server::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("metro_server=info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    // Load the network (fail fast if unusable)
    let network = match Network::load(&config.network_path) {
        Ok(network) => network,
        Err(e) => {
            error!(path = %config.network_path.display(), error = %e, "Failed to load network");
            std::process::exit(1);
        }
    };
    info!(
        lines = network.routable_lines().count(),
        stations = network.station_count(),
        "Network ready"
    );

    let state = AppState::new(network, PlannerConfig::default());
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, error = %e, "Failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %config.bind_addr, "Metro route planner listening");
    info!("API endpoints: GET /health, /api/stations, /api/route?source=&destination=, /api/network");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server error");
        std::process::exit(1);
    }
}
