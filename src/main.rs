mod adapters;
mod application;
mod config;
mod domain;
mod interface;
mod ports;

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use adapters::{MemorySearchLog, MySqlSearchLog, OpenWeatherClient};
use application::WeatherService;
use config::{Config, PORT};
use interface::http::create_router;
use ports::SearchLog;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("weatherlog={},tower_http=info", config.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🚀 Starting weatherlog v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: {:?}", config);

    if config.openweather_api_key.is_empty() {
        warn!("⚠ OPENWEATHER_API_KEY is not set. Weather lookups will be rejected by the provider.");
    }

    // Initialize adapters
    let search_log: Arc<dyn SearchLog> = match &config.database {
        Some(db) => Arc::new(MySqlSearchLog::connect(db).await),
        None => {
            warn!("⚠ DB_HOST is not set. Searches are kept in memory and lost on restart; production deployments must set DB_HOST.");
            Arc::new(MemorySearchLog::with_default_size())
        }
    };

    let gateway = Arc::new(OpenWeatherClient::with_base_url(
        config.openweather_base_url.clone(),
        config.openweather_api_key.clone(),
    ));

    let weather_service = Arc::new(WeatherService::new(gateway, search_log));

    info!("✓ Weather service initialized");

    // Create HTTP server
    let app = create_router(weather_service.clone());
    let addr = format!("0.0.0.0:{}", PORT);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("✓ weatherlog listening on {}", addr);
    info!("  → Dashboard: http://localhost:{}", PORT);
    info!("  → API: http://localhost:{}/api/weather", PORT);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    weather_service.shutdown().await;
    info!("Search log closed, bye");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
