//! Route definitions for the Weather Trends API

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Yearly monthly averages
        .route("/yearly-summary", get(handlers::get_yearly_summary))
        // Daily trend within one month
        .route("/monthly-trend", get(handlers::get_monthly_trend))
}
