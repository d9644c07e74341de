//! Aggregation services for the Weather Trends API

pub mod monthly_trend;
pub mod year_selector;
pub mod yearly_aggregation;

pub use monthly_trend::MonthlyTrendService;
pub use yearly_aggregation::YearlyAggregationService;
