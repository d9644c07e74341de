//! Integration tests for the monthly trend endpoint

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use tower::ServiceExt;

use shared::models::Observation;
use weather_trends_backend::config::{Config, DataConfig, ServerConfig};
use weather_trends_backend::{create_app, AppState};

fn observation(
    year: i32,
    month: u32,
    day: u32,
    temperature: f64,
    humidity: f64,
    condition: &str,
) -> Observation {
    Observation::new(
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap(),
        temperature,
        humidity,
        condition,
    )
}

fn test_app(observations: Vec<Observation>) -> Router {
    let config = Config {
        environment: "test".to_string(),
        server: ServerConfig {
            port: 0,
            host: "127.0.0.1".to_string(),
        },
        data: DataConfig {
            csv_path: "unused".to_string(),
        },
    };
    create_app(AppState {
        observations: Arc::new(observations),
        config: Arc::new(config),
    })
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let payload = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
    };
    (status, payload)
}

#[tokio::test]
async fn test_monthly_trend_structure() {
    let observations = vec![
        observation(2024, 2, 3, 4.0, 80.0, "rain"),
        observation(2024, 2, 3, 6.0, 60.0, "rain"),
        observation(2024, 2, 10, 8.0, 55.0, "clear"),
    ];

    let (status, payload) = get_json(test_app(observations), "/api/v1/monthly-trend?month=2").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(payload["year"], 2024);
    assert_eq!(payload["month"], 2);
    assert_eq!(payload["most_common_condition"], "rain");

    let aggregates = payload["daily_aggregates"].as_array().unwrap();
    assert_eq!(aggregates.len(), 31);

    let days: Vec<u64> = aggregates
        .iter()
        .map(|aggregate| aggregate["day"].as_u64().unwrap())
        .collect();
    assert_eq!(days, (1..=31).collect::<Vec<u64>>());

    let day_3 = &aggregates[2];
    assert_eq!(day_3["avg_temperature"], 5.0);
    assert_eq!(day_3["avg_humidity"], 70.0);
    assert_eq!(day_3["observation_count"], 2);

    // February never has a day 30 or 31; they still appear, empty
    for index in [29, 30] {
        assert!(aggregates[index]["avg_temperature"].is_null());
        assert!(aggregates[index]["avg_humidity"].is_null());
        assert_eq!(aggregates[index]["observation_count"], 0);
    }
}

#[tokio::test]
async fn test_condition_mode_tie_breaks_alphabetically() {
    let observations = vec![
        observation(2024, 5, 1, 15.0, 50.0, "rain"),
        observation(2024, 5, 2, 15.0, 50.0, "rain"),
        observation(2024, 5, 3, 15.0, 50.0, "clear"),
        observation(2024, 5, 4, 15.0, 50.0, "clear"),
        observation(2024, 5, 5, 15.0, 50.0, "fog"),
    ];

    let (status, payload) = get_json(test_app(observations), "/api/v1/monthly-trend?month=5").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["most_common_condition"], "clear");
}

#[tokio::test]
async fn test_all_empty_conditions_yield_null_mode() {
    let observations = vec![
        observation(2024, 5, 1, 15.0, 50.0, ""),
        observation(2024, 5, 2, 16.0, 51.0, ""),
    ];

    let (status, payload) = get_json(test_app(observations), "/api/v1/monthly-trend?month=5").await;

    assert_eq!(status, StatusCode::OK);
    assert!(payload["most_common_condition"].is_null());
}

#[tokio::test]
async fn test_month_without_data_is_not_found() {
    // Reporting year is 2024 (partial); March has no observations
    let observations = vec![observation(2024, 1, 1, 5.0, 70.0, "clear")];

    let (status, payload) = get_json(test_app(observations), "/api/v1/monthly-trend?month=3").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(payload["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_trend_uses_reporting_year_not_latest_partial() {
    // 2023 is full and therefore selected; the 2024 April data is invisible
    let mut observations: Vec<Observation> = (1..=12)
        .map(|month| observation(2023, month, 1, 12.0, 55.0, "cloudy"))
        .collect();
    observations.push(observation(2024, 4, 1, 20.0, 40.0, "clear"));

    let (status, payload) = get_json(test_app(observations), "/api/v1/monthly-trend?month=4").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["year"], 2023);
    assert_eq!(payload["daily_aggregates"][0]["avg_temperature"], 12.0);
}

#[tokio::test]
async fn test_empty_dataset_every_month_is_not_found() {
    for month in 1..=12 {
        let uri = format!("/api/v1/monthly-trend?month={}", month);
        let (status, _) = get_json(test_app(Vec::new()), &uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "month {}", month);
    }
}

#[tokio::test]
async fn test_month_out_of_range_is_rejected() {
    for month in [0, 13, 99] {
        let uri = format!("/api/v1/monthly-trend?month={}", month);
        let (status, payload) = get_json(test_app(Vec::new()), &uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "month {}", month);
        assert_eq!(payload["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(payload["error"]["field"], "month");
    }
}

#[tokio::test]
async fn test_missing_month_parameter_is_rejected() {
    let response = test_app(Vec::new())
        .oneshot(
            Request::builder()
                .uri("/api/v1/monthly-trend")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
