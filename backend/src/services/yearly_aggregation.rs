//! Monthly aggregation over the reporting year

use std::sync::Arc;

use shared::models::{MonthlySummary, Observation};

use crate::services::year_selector;

/// Computes per-month averages for the selected reporting year
#[derive(Clone)]
pub struct YearlyAggregationService {
    observations: Arc<Vec<Observation>>,
}

/// Result of a yearly summary computation
#[derive(Debug, Clone, PartialEq)]
pub struct YearlySummary {
    /// `None` when the dataset holds no observations at all
    pub year: Option<i32>,
    pub months: Vec<MonthlySummary>,
}

impl YearlyAggregationService {
    pub fn new(observations: Arc<Vec<Observation>>) -> Self {
        Self { observations }
    }

    /// Monthly averages for the latest full year (or latest partial year)
    pub fn yearly_summary(&self) -> YearlySummary {
        let Some(year) = year_selector::select_reporting_year(&self.observations) else {
            return YearlySummary {
                year: None,
                months: Vec::new(),
            };
        };

        let selected = year_selector::observations_for_year(&self.observations, year);
        YearlySummary {
            year: Some(year),
            months: compute_monthly_summaries(&selected),
        }
    }
}

/// Per-month running sums
#[derive(Clone, Copy, Default)]
struct MonthBucket {
    temperature_sum: f64,
    humidity_sum: f64,
    count: usize,
}

impl MonthBucket {
    fn add(&mut self, observation: &Observation) {
        self.temperature_sum += observation.temperature;
        self.humidity_sum += observation.humidity;
        self.count += 1;
    }
}

/// Compute one [`MonthlySummary`] per month (1-12) of a single-year input.
///
/// Callers must pass observations of one calendar year only; the year tag is
/// taken from the first observation. Empty input yields an empty vector, not
/// twelve null entries.
pub fn compute_monthly_summaries(observations: &[Observation]) -> Vec<MonthlySummary> {
    let Some(first) = observations.first() else {
        return Vec::new();
    };
    let year = first.year();

    let mut buckets = [MonthBucket::default(); 12];
    for observation in observations {
        buckets[(observation.month() - 1) as usize].add(observation);
    }

    (1..=12)
        .map(|month| {
            let bucket = buckets[(month - 1) as usize];
            if bucket.count > 0 {
                MonthlySummary {
                    year,
                    month,
                    avg_temperature: Some(bucket.temperature_sum / bucket.count as f64),
                    avg_humidity: Some(bucket.humidity_sum / bucket.count as f64),
                    observation_count: bucket.count,
                }
            } else {
                MonthlySummary {
                    year,
                    month,
                    avg_temperature: None,
                    avg_humidity: None,
                    observation_count: 0,
                }
            }
        })
        .collect()
}
