//! HTTP handler for the yearly summary endpoint

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::models::YearlySummaryResponse;
use crate::services::YearlyAggregationService;
use crate::AppState;

/// Monthly average temperature and humidity for the latest full year
pub async fn get_yearly_summary(
    State(state): State<AppState>,
) -> AppResult<Json<YearlySummaryResponse>> {
    let service = YearlyAggregationService::new(state.observations.clone());
    let summary = service.yearly_summary();
    Ok(Json(summary.into()))
}
