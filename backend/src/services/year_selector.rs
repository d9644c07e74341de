//! Reporting-year selection
//!
//! Statistics are computed over the most recent year with full 12-month
//! coverage, so a later but partial year never displaces complete-year
//! numbers. "Full" counts distinct months present, not day-level coverage.

use std::collections::{BTreeMap, BTreeSet};

use shared::models::Observation;

/// Pick the year to report on: the latest full year, or the latest year with
/// any data when no full year exists. `None` only for an empty input.
pub fn select_reporting_year(observations: &[Observation]) -> Option<i32> {
    let mut months_by_year: BTreeMap<i32, BTreeSet<u32>> = BTreeMap::new();
    for observation in observations {
        months_by_year
            .entry(observation.year())
            .or_default()
            .insert(observation.month());
    }

    let latest_full_year = months_by_year
        .iter()
        .rev()
        .find(|(_, months)| months.len() == 12)
        .map(|(year, _)| *year);

    latest_full_year.or_else(|| months_by_year.keys().next_back().copied())
}

/// Restrict `observations` to those of `year`, preserving order
pub fn observations_for_year(observations: &[Observation], year: i32) -> Vec<Observation> {
    observations
        .iter()
        .filter(|observation| observation.year() == year)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn observation(year: i32, month: u32, day: u32) -> Observation {
        Observation::new(
            NaiveDate::from_ymd_opt(year, month, day)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
            10.0,
            60.0,
            "clear",
        )
    }

    #[test]
    fn test_empty_input_selects_nothing() {
        assert_eq!(select_reporting_year(&[]), None);
    }

    #[test]
    fn test_full_year_preferred_over_later_partial_year() {
        let mut observations: Vec<Observation> =
            (1..=12).map(|month| observation(2023, month, 1)).collect();
        observations.push(observation(2024, 1, 1));
        observations.push(observation(2024, 2, 1));

        assert_eq!(select_reporting_year(&observations), Some(2023));
    }

    #[test]
    fn test_latest_full_year_wins_among_full_years() {
        let mut observations: Vec<Observation> =
            (1..=12).map(|month| observation(2022, month, 1)).collect();
        observations.extend((1..=12).map(|month| observation(2023, month, 1)));

        assert_eq!(select_reporting_year(&observations), Some(2023));
    }

    #[test]
    fn test_fallback_to_latest_partial_year() {
        let observations = vec![
            observation(2023, 5, 1),
            observation(2024, 1, 1),
            observation(2024, 2, 1),
        ];

        assert_eq!(select_reporting_year(&observations), Some(2024));
    }

    #[test]
    fn test_twelve_months_spread_over_two_years_is_not_full() {
        // Six months in each year: neither year is full, latest wins
        let mut observations: Vec<Observation> =
            (1..=6).map(|month| observation(2023, month, 1)).collect();
        observations.extend((7..=12).map(|month| observation(2024, month, 1)));

        assert_eq!(select_reporting_year(&observations), Some(2024));
    }

    #[test]
    fn test_observations_for_year_preserves_order() {
        let observations = vec![
            observation(2023, 1, 2),
            observation(2024, 1, 1),
            observation(2023, 1, 5),
        ];

        let selected = observations_for_year(&observations, 2023);
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].day(), 2);
        assert_eq!(selected[1].day(), 5);
    }
}
