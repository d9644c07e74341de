//! API models for the Weather Trends API
//!
//! Re-exports the domain models from the shared crate and defines the wire
//! DTOs for the HTTP surface. Null averages are serialized explicitly so the
//! "no data" case stays unambiguous for clients.

pub use shared::models::*;

use serde::Serialize;

use crate::services::yearly_aggregation::YearlySummary;

/// One month of the yearly summary response
#[derive(Debug, Serialize)]
pub struct MonthlySummaryDto {
    pub month: u32,
    pub avg_temperature: Option<f64>,
    pub avg_humidity: Option<f64>,
    pub observation_count: usize,
}

impl From<MonthlySummary> for MonthlySummaryDto {
    fn from(summary: MonthlySummary) -> Self {
        Self {
            month: summary.month,
            avg_temperature: summary.avg_temperature,
            avg_humidity: summary.avg_humidity,
            observation_count: summary.observation_count,
        }
    }
}

/// Response body for `GET /api/v1/yearly-summary`
#[derive(Debug, Serialize)]
pub struct YearlySummaryResponse {
    /// Reporting year; `null` when the dataset is empty
    pub year: Option<i32>,
    pub months: Vec<MonthlySummaryDto>,
}

impl From<YearlySummary> for YearlySummaryResponse {
    fn from(summary: YearlySummary) -> Self {
        Self {
            year: summary.year,
            months: summary.months.into_iter().map(Into::into).collect(),
        }
    }
}

/// One day of the monthly trend response
#[derive(Debug, Serialize)]
pub struct DailyAggregateDto {
    pub day: u32,
    pub avg_temperature: Option<f64>,
    pub avg_humidity: Option<f64>,
    pub observation_count: usize,
}

impl From<DailyAggregate> for DailyAggregateDto {
    fn from(aggregate: DailyAggregate) -> Self {
        Self {
            day: aggregate.day,
            avg_temperature: aggregate.avg_temperature,
            avg_humidity: aggregate.avg_humidity,
            observation_count: aggregate.observation_count,
        }
    }
}

/// Response body for `GET /api/v1/monthly-trend`
#[derive(Debug, Serialize)]
pub struct MonthlyTrendResponse {
    pub year: i32,
    pub month: u32,
    pub daily_aggregates: Vec<DailyAggregateDto>,
    pub most_common_condition: Option<String>,
}

impl From<MonthlyTrend> for MonthlyTrendResponse {
    fn from(trend: MonthlyTrend) -> Self {
        Self {
            year: trend.year,
            month: trend.month,
            daily_aggregates: trend.daily_aggregates.into_iter().map(Into::into).collect(),
            most_common_condition: trend.most_common_condition,
        }
    }
}
