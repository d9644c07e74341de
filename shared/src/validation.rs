//! Validation utilities for weather data

/// Lowest acceptable relative humidity percentage
pub const HUMIDITY_MIN: f64 = 0.0;

/// Highest acceptable relative humidity percentage
pub const HUMIDITY_MAX: f64 = 100.0;

/// Validate that a humidity reading is a percentage within [0, 100]
///
/// Non-finite values (NaN, infinities) are rejected.
pub fn is_valid_humidity(humidity: f64) -> bool {
    humidity.is_finite() && (HUMIDITY_MIN..=HUMIDITY_MAX).contains(&humidity)
}

/// Validate that a month number lies in 1-12
pub fn is_valid_month(month: u32) -> bool {
    (1..=12).contains(&month)
}
