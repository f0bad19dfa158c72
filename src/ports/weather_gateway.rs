use async_trait::async_trait;
use thiserror::Error;

use crate::domain::WeatherSnapshot;

/// Failures reported by a weather provider
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The provider does not know the requested city. Carries the
    /// provider's own message so it can be shown to the user.
    #[error("{0}")]
    NotFound(String),

    /// Transport failure, error status or unreadable payload
    #[error("weather provider request failed: {0}")]
    Upstream(String),
}

/// Port for fetching current weather from a third-party provider
#[async_trait]
pub trait WeatherGateway: Send + Sync {
    /// Fetch the current weather for a city name, forwarded verbatim
    async fn fetch_weather(&self, city: &str) -> Result<WeatherSnapshot, GatewayError>;
}
