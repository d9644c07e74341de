//! Daily trend aggregation for a single month
//!
//! Produces per-day averages plus the most common weather condition of the
//! month. The day axis is always 1-31; days past the end of a short month
//! carry zero observations, which is safe since no observation can report an
//! out-of-range day.

use std::collections::HashMap;
use std::sync::Arc;

use shared::models::{DailyAggregate, MonthlyTrend, Observation};

use crate::services::year_selector;

/// Computes the daily trend of one month within the reporting year
#[derive(Clone)]
pub struct MonthlyTrendService {
    observations: Arc<Vec<Observation>>,
}

impl MonthlyTrendService {
    pub fn new(observations: Arc<Vec<Observation>>) -> Self {
        Self { observations }
    }

    /// Trend for `month` (1-12) of the reporting year; `None` when that month
    /// holds no observations
    pub fn monthly_trend(&self, month: u32) -> Option<MonthlyTrend> {
        let year = year_selector::select_reporting_year(&self.observations)?;
        let month_observations: Vec<Observation> = self
            .observations
            .iter()
            .filter(|observation| observation.year() == year && observation.month() == month)
            .cloned()
            .collect();

        compute_monthly_trend(&month_observations)
    }
}

/// Per-day running sums
#[derive(Clone, Copy, Default)]
struct DayBucket {
    temperature_sum: f64,
    humidity_sum: f64,
    count: usize,
}

impl DayBucket {
    fn add(&mut self, observation: &Observation) {
        self.temperature_sum += observation.temperature;
        self.humidity_sum += observation.humidity;
        self.count += 1;
    }
}

/// Compute the trend of a single-month input; `None` for empty input.
///
/// Callers must pass observations of one year/month only; the tags are taken
/// from the first observation.
pub fn compute_monthly_trend(observations: &[Observation]) -> Option<MonthlyTrend> {
    let first = observations.first()?;
    let year = first.year();
    let month = first.month();

    let mut buckets = [DayBucket::default(); 31];
    for observation in observations {
        buckets[(observation.day() - 1) as usize].add(observation);
    }

    let daily_aggregates = (1..=31)
        .map(|day| {
            let bucket = buckets[(day - 1) as usize];
            if bucket.count > 0 {
                DailyAggregate {
                    year,
                    month,
                    day,
                    avg_temperature: Some(bucket.temperature_sum / bucket.count as f64),
                    avg_humidity: Some(bucket.humidity_sum / bucket.count as f64),
                    observation_count: bucket.count,
                }
            } else {
                DailyAggregate {
                    year,
                    month,
                    day,
                    avg_temperature: None,
                    avg_humidity: None,
                    observation_count: 0,
                }
            }
        })
        .collect();

    Some(MonthlyTrend {
        year,
        month,
        daily_aggregates,
        most_common_condition: most_common_condition(observations),
    })
}

/// Mode of the non-empty condition strings; ties resolve to the
/// lexicographically smallest condition
fn most_common_condition(observations: &[Observation]) -> Option<String> {
    let mut tallies: HashMap<&str, usize> = HashMap::new();
    for observation in observations {
        if !observation.condition.is_empty() {
            *tallies.entry(observation.condition.as_str()).or_insert(0) += 1;
        }
    }

    let max_tally = tallies.values().copied().max()?;
    tallies
        .into_iter()
        .filter(|(_, tally)| *tally == max_tally)
        .map(|(condition, _)| condition)
        .min()
        .map(str::to_string)
}
