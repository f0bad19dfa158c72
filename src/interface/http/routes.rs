use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::application::WeatherService;
use crate::interface::web::{asset_handler, index_handler};

use super::handlers::{health_handler, recent_searches_handler, weather_handler, AppState};

pub fn create_router(weather_service: Arc<WeatherService>) -> Router {
    let state = AppState { weather_service };

    Router::new()
        // API routes
        .route("/api/health", get(health_handler))
        .route("/api/weather", post(weather_handler))
        .route("/api/recent-searches", get(recent_searches_handler))
        // Embedded dashboard
        .route("/", get(index_handler))
        .route("/{file}", get(asset_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
