//! Weather Trends API - Backend Server
//!
//! Serves monthly weather averages and per-day trends computed from a CSV
//! file of timestamped observations.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use config::Config;

use shared::models::Observation;

/// Application state shared across handlers
///
/// The observation set is loaded once at startup and never mutated
/// afterwards; handlers only clone the `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub observations: Arc<Vec<Observation>>,
    pub config: Arc<Config>,
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration: the dashboard frontend is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Weather Trends API v1.0"
}
