use std::sync::Arc;

use axum::{
    debug_handler,
    extract::{rejection::JsonRejection, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::{debug, error};

use crate::application::{LookupError, WeatherService};
use crate::domain::{SearchRecord, Theme};

/// Header carrying the dashboard theme for a successful lookup
pub const THEME_HEADER: HeaderName = HeaderName::from_static("x-weather-theme");

/// Error rendered as `{"error": message}` with a matching status
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    ServiceUnavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::ServiceUnavailable(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::MissingCity => ApiError::BadRequest(LookupError::MissingCity.to_string()),
            LookupError::CityNotFound(msg) => ApiError::NotFound(msg),
            LookupError::Gateway(e) => {
                error!("Weather API error: {}", e);
                ApiError::ServiceUnavailable("Failed to fetch weather data".to_string())
            }
            LookupError::Store(e) => {
                error!("Search log write failed: {}", e);
                ApiError::ServiceUnavailable("Failed to save search".to_string())
            }
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub weather_service: Arc<WeatherService>,
}

/// Body for POST /api/weather
#[derive(Debug, Deserialize)]
pub struct WeatherRequest {
    #[serde(default)]
    pub city: Option<String>,
}

/// Handler for GET /api/health
pub async fn health_handler() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "healthy",
            "service": "weatherlog"
        })),
    )
}

/// Handler for POST /api/weather
#[debug_handler]
pub async fn weather_handler(
    State(state): State<AppState>,
    body: Result<Json<WeatherRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    // Unreadable bodies are treated like a missing city
    let Json(request) = body.map_err(|e| {
        debug!("Rejected weather request body: {}", e.body_text());
        ApiError::BadRequest(LookupError::MissingCity.to_string())
    })?;
    let city = request.city.unwrap_or_default();

    let snapshot = state.weather_service.lookup(&city).await?;

    let theme = Theme::from_condition(snapshot.condition());
    let mut response = (StatusCode::OK, Json(snapshot)).into_response();
    response
        .headers_mut()
        .insert(THEME_HEADER, HeaderValue::from_static(theme.as_str()));

    Ok(response)
}

/// Handler for GET /api/recent-searches
pub async fn recent_searches_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<SearchRecord>>, ApiError> {
    match state.weather_service.recent_searches().await {
        Ok(searches) => Ok(Json(searches)),
        Err(e) => {
            error!("Search log query failed: {}", e);
            Err(ApiError::ServiceUnavailable("Failed to fetch recent searches".to_string()))
        }
    }
}
