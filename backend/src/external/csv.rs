//! CSV data source for weather observations
//!
//! Parses a delimited file with `timestamp`, `temperature`, `humidity` and
//! `condition` columns into validated [`Observation`] records. Rows that
//! fail to parse are dropped, not errors: only a missing file or a missing
//! required column is fatal.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use csv::{ReaderBuilder, StringRecord};
use thiserror::Error;

use shared::models::Observation;
use shared::validation::is_valid_humidity;

/// Columns every source file must declare in its header
const REQUIRED_COLUMNS: [&str; 4] = ["timestamp", "temperature", "humidity", "condition"];

/// Accepted timestamp layouts, tried in order
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Errors raised while loading the observation file
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("weather data file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("weather data file is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("failed to read weather data: {0}")]
    Csv(#[from] csv::Error),
}

/// Header positions of the required columns
struct ColumnIndexes {
    timestamp: usize,
    temperature: usize,
    humidity: usize,
    condition: usize,
}

impl ColumnIndexes {
    fn resolve(headers: &StringRecord) -> Result<Self, LoadError> {
        let position = |name: &str| headers.iter().position(|header| header.trim() == name);

        match (
            position("timestamp"),
            position("temperature"),
            position("humidity"),
            position("condition"),
        ) {
            (Some(timestamp), Some(temperature), Some(humidity), Some(condition)) => Ok(Self {
                timestamp,
                temperature,
                humidity,
                condition,
            }),
            _ => {
                let missing: Vec<String> = REQUIRED_COLUMNS
                    .iter()
                    .filter(|name| position(name).is_none())
                    .map(|name| name.to_string())
                    .collect();
                Err(LoadError::MissingColumns(missing))
            }
        }
    }
}

/// Load all valid observations from `path`, sorted ascending by timestamp
///
/// Malformed rows (unparseable timestamp or numbers, humidity outside
/// [0, 100]) are silently discarded; the total dropped count is logged once.
pub fn load_observations(path: &Path) -> Result<Vec<Observation>, LoadError> {
    if !path.is_file() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let mut reader = ReaderBuilder::new().flexible(true).from_path(path)?;
    let columns = ColumnIndexes::resolve(reader.headers()?)?;

    let mut observations = Vec::new();
    let mut dropped = 0usize;
    for record in reader.records() {
        let record = record?;
        match parse_row(&record, &columns) {
            Some(observation) => observations.push(observation),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        tracing::debug!(dropped, "dropped malformed observation rows");
    }

    observations.sort_by_key(|observation| observation.timestamp);
    Ok(observations)
}

/// Parse one record into an [`Observation`]; `None` means "drop the row"
fn parse_row(record: &StringRecord, columns: &ColumnIndexes) -> Option<Observation> {
    let timestamp = parse_timestamp(record.get(columns.timestamp)?)?;

    let temperature: f64 = record.get(columns.temperature)?.trim().parse().ok()?;
    if !temperature.is_finite() {
        return None;
    }

    let humidity: f64 = record.get(columns.humidity)?.trim().parse().ok()?;
    if !is_valid_humidity(humidity) {
        return None;
    }

    // A missing or blank condition is data, not an error
    let condition = record
        .get(columns.condition)
        .unwrap_or_default()
        .trim()
        .to_string();

    Some(Observation {
        timestamp,
        temperature,
        humidity,
        condition,
    })
}

/// Parse a timestamp in any of the accepted layouts; bare dates map to midnight
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    for format in TIMESTAMP_FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(timestamp);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}
