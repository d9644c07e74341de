//! HTTP handler for the monthly trend endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use shared::validation::is_valid_month;

use crate::error::{AppError, AppResult};
use crate::models::MonthlyTrendResponse;
use crate::services::MonthlyTrendService;
use crate::AppState;

/// Query parameters for the monthly trend endpoint
#[derive(Debug, Deserialize)]
pub struct MonthlyTrendQuery {
    /// Month number (1-12)
    pub month: u32,
}

/// Daily aggregates and the most common weather condition for one month of
/// the latest full year
pub async fn get_monthly_trend(
    State(state): State<AppState>,
    Query(query): Query<MonthlyTrendQuery>,
) -> AppResult<Json<MonthlyTrendResponse>> {
    if !is_valid_month(query.month) {
        return Err(AppError::Validation {
            field: "month".to_string(),
            message: "month must be between 1 and 12".to_string(),
        });
    }

    let service = MonthlyTrendService::new(state.observations.clone());
    let trend = service
        .monthly_trend(query.month)
        .ok_or_else(|| AppError::NotFound("No data available for requested month".to_string()))?;

    Ok(Json(trend.into()))
}
