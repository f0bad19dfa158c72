use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use sqlx::FromRow;
use tracing::{error, info};

use crate::config::DatabaseConfig;
use crate::domain::SearchRecord;
use crate::ports::{SearchLog, StoreError};

const MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, FromRow)]
struct SearchRow {
    city: String,
    time: NaiveDateTime,
}

impl From<SearchRow> for SearchRecord {
    fn from(row: SearchRow) -> Self {
        SearchRecord::new(row.city, row.time)
    }
}

/// MySQL-backed search log over the `search_history` table
pub struct MySqlSearchLog {
    pool: MySqlPool,
}

impl MySqlSearchLog {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Connect to the configured database.
    ///
    /// A failed first connection is logged and the log starts degraded: the
    /// pool is built lazily, so every operation reports a `StoreError` until
    /// the server becomes reachable.
    pub async fn connect(config: &DatabaseConfig) -> Self {
        Self::connect_with_pool(config, MySqlPoolOptions::new()).await
    }

    /// Same as [`connect`](Self::connect) with caller-supplied pool options
    /// (driver defaults otherwise, including the acquire timeout)
    pub async fn connect_with_pool(config: &DatabaseConfig, pool_options: MySqlPoolOptions) -> Self {
        let options = Self::connect_options(config);
        let pool_options = pool_options.max_connections(MAX_CONNECTIONS);

        match pool_options.clone().connect_with(options.clone()).await {
            Ok(pool) => {
                info!("✓ Connected to database {}@{}", config.name, config.host);
                Self::new(pool)
            }
            Err(e) => {
                error!("✗ Database connection failed: {}. Search log unavailable until it recovers.", e);
                Self::new(pool_options.connect_lazy_with(options))
            }
        }
    }

    fn connect_options(config: &DatabaseConfig) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.name)
    }
}

#[async_trait]
impl SearchLog for MySqlSearchLog {
    async fn record(&self, city: &str, time: NaiveDateTime) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO search_history (city, time) VALUES (?, ?)")
            .bind(city)
            .bind(time)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<SearchRecord>, StoreError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let rows: Vec<SearchRow> =
            sqlx::query_as("SELECT city, time FROM search_history ORDER BY time DESC LIMIT ?")
                .bind(limit)
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(SearchRecord::from).collect())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use chrono::Utc;

    fn unreachable_database() -> DatabaseConfig {
        DatabaseConfig {
            host: "127.0.0.1".to_string(),
            port: 9,
            user: "weather".to_string(),
            password: "secret".to_string(),
            name: "weather_app".to_string(),
        }
    }

    #[tokio::test]
    async fn test_unreachable_database_starts_degraded() {
        let pool_options = MySqlPoolOptions::new().acquire_timeout(Duration::from_millis(300));
        let log = MySqlSearchLog::connect_with_pool(&unreachable_database(), pool_options).await;

        let recorded = log.record("London", Utc::now().naive_utc()).await;
        assert!(matches!(recorded, Err(StoreError::Database(_))), "got {recorded:?}");

        let recent = log.recent(5).await;
        assert!(matches!(recent, Err(StoreError::Database(_))), "got {recent:?}");

        log.close().await;
    }
}
