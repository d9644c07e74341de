//! HTTP handlers for the Weather Trends API

pub mod health;
pub mod monthly_trend;
pub mod yearly_summary;

pub use health::health_check;
pub use monthly_trend::get_monthly_trend;
pub use yearly_summary::get_yearly_summary;
