//! Weather observation and aggregate models

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A single validated weather observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub timestamp: NaiveDateTime,
    pub temperature: f64,
    /// Relative humidity percentage, always within [0, 100]
    pub humidity: f64,
    /// Free-text weather condition; empty when the source row carried none
    pub condition: String,
}

impl Observation {
    pub fn new(timestamp: NaiveDateTime, temperature: f64, humidity: f64, condition: impl Into<String>) -> Self {
        Self {
            timestamp,
            temperature,
            humidity,
            condition: condition.into(),
        }
    }

    /// Calendar date portion of the timestamp
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn year(&self) -> i32 {
        self.timestamp.year()
    }

    pub fn month(&self) -> u32 {
        self.timestamp.month()
    }

    pub fn day(&self) -> u32 {
        self.timestamp.day()
    }
}

/// Aggregated averages for one calendar month of a specific year
///
/// `avg_temperature` and `avg_humidity` are `None` exactly when
/// `observation_count` is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub year: i32,
    /// Month number (1-12)
    pub month: u32,
    pub avg_temperature: Option<f64>,
    pub avg_humidity: Option<f64>,
    pub observation_count: usize,
}

/// Aggregated averages for one day of a month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAggregate {
    pub year: i32,
    /// Month number (1-12)
    pub month: u32,
    /// Day of month (1-31)
    pub day: u32,
    pub avg_temperature: Option<f64>,
    pub avg_humidity: Option<f64>,
    pub observation_count: usize,
}

/// Trend data for one month: daily aggregates plus the most common condition
///
/// `daily_aggregates` always holds 31 entries in ascending day order; days
/// past the end of a short month simply carry zero observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrend {
    pub year: i32,
    /// Month number (1-12)
    pub month: u32,
    pub daily_aggregates: Vec<DailyAggregate>,
    pub most_common_condition: Option<String>,
}
