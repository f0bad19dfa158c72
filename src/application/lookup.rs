use std::sync::Arc;

use chrono::{NaiveDateTime, SubsecRound, Utc};
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::{SearchRecord, WeatherSnapshot, RECENT_SEARCH_LIMIT};
use crate::ports::{GatewayError, SearchLog, StoreError, WeatherGateway};

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("City is required")]
    MissingCity,

    #[error("{0}")]
    CityNotFound(String),

    #[error(transparent)]
    Gateway(GatewayError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<GatewayError> for LookupError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::NotFound(message) => Self::CityNotFound(message),
            other => Self::Gateway(other),
        }
    }
}

/// Weather lookups and the search log behind them
pub struct WeatherService {
    gateway: Arc<dyn WeatherGateway>,
    search_log: Arc<dyn SearchLog>,
}

impl WeatherService {
    pub fn new(gateway: Arc<dyn WeatherGateway>, search_log: Arc<dyn SearchLog>) -> Self {
        Self { gateway, search_log }
    }

    /// Fetch the current weather for `city` and log the search.
    ///
    /// The snapshot is only handed back once the search has been recorded;
    /// if the write fails the fetched data is discarded.
    pub async fn lookup(&self, city: &str) -> Result<WeatherSnapshot, LookupError> {
        if city.is_empty() {
            return Err(LookupError::MissingCity);
        }

        let snapshot = self.gateway.fetch_weather(city).await?;

        self.search_log.record(city, now()).await.map_err(|e| {
            warn!("Dropping weather for {:?}: search not logged: {}", city, e);
            e
        })?;

        info!(
            "Logged search for {:?}: {} {:?}°C {:?}%",
            city,
            snapshot.location_name().unwrap_or("?"),
            snapshot.temperature(),
            snapshot.humidity()
        );
        Ok(snapshot)
    }

    /// The most recent searches, newest first
    pub async fn recent_searches(&self) -> Result<Vec<SearchRecord>, LookupError> {
        Ok(self.search_log.recent(RECENT_SEARCH_LIMIT).await?)
    }

    /// Release the search log's connections
    pub async fn shutdown(&self) {
        self.search_log.close().await;
    }
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc().trunc_subsecs(0)
}
