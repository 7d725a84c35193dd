//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::{debug, warn};

use crate::planner::{Planner, RouteError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stations", get(list_stations))
        .route("/api/route", get(find_route))
        .route("/api/network", get(network_map))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every station, sorted for display.
async fn list_stations(State(state): State<AppState>) -> Json<StationsResponse> {
    let planner = Planner::new(&state.network, &state.config);
    Json(StationsResponse {
        stations: planner.station_names().into_iter().collect(),
    })
}

/// Resolve the route and fare between two stations.
async fn find_route(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let source = required(req.source, "source")?;
    let destination = required(req.destination, "destination")?;

    let planner = Planner::new(&state.network, &state.config);
    let itinerary = planner.resolve(&source, &destination)?;

    debug!(
        source = %source,
        destination = %destination,
        stations = itinerary.route.stations.len(),
        fare = itinerary.fare,
        "Route resolved"
    );

    Ok(Json(RouteResponse::from_itinerary(itinerary)))
}

/// The routable lines with station positions, for drawing the map.
async fn network_map(State(state): State<AppState>) -> Json<NetworkMapResponse> {
    Json(NetworkMapResponse::from_network(&state.network))
}

fn required(value: Option<String>, name: &str) -> Result<String, AppError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest {
            message: format!("missing query parameter: {name}"),
        })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    NoRoute { message: String },
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        match e {
            RouteError::UnknownStation(_) => AppError::NotFound {
                message: e.to_string(),
            },
            RouteError::NoRouteFound { .. } => AppError::NoRoute {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::NoRoute { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
        };

        warn!(status = %status, error = %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
