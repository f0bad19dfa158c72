use async_trait::async_trait;
use chrono::NaiveDateTime;
use thiserror::Error;

use crate::domain::SearchRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("search log unavailable: {0}")]
    Unavailable(String),
}

/// Port for the append-only log of city searches
#[async_trait]
pub trait SearchLog: Send + Sync {
    /// Append a search entry
    async fn record(&self, city: &str, time: NaiveDateTime) -> Result<(), StoreError>;

    /// Get at most `limit` entries, newest first
    async fn recent(&self, limit: usize) -> Result<Vec<SearchRecord>, StoreError>;

    /// Release underlying connections
    async fn close(&self) {}
}
