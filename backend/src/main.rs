//! Weather Trends API - server entrypoint

use std::{net::SocketAddr, path::Path, sync::Arc};

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use weather_trends_backend::{create_app, external, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "weather_server=debug,weather_trends_backend=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Weather Trends API Server");
    tracing::info!("Environment: {}", config.environment);

    // Load the dataset up front so a missing or malformed file aborts
    // startup instead of failing the first request.
    tracing::info!("Loading weather observations from {}", config.data.csv_path);
    let observations = external::csv::load_observations(Path::new(&config.data.csv_path))
        .with_context(|| format!("failed to load weather data from {}", config.data.csv_path))?;
    tracing::info!("Loaded {} observations", observations.len());

    // Create application state
    let state = AppState {
        observations: Arc::new(observations),
        config: Arc::new(config.clone()),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
