use std::collections::VecDeque;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::domain::SearchRecord;
use crate::ports::{SearchLog, StoreError};

/// In-memory search log, used when no database is configured
pub struct MemorySearchLog {
    records: RwLock<VecDeque<SearchRecord>>,
    max_size: usize,
}

impl MemorySearchLog {
    pub fn new(max_size: usize) -> Self {
        Self {
            records: RwLock::new(VecDeque::with_capacity(max_size.min(1024))),
            max_size,
        }
    }

    pub fn with_default_size() -> Self {
        Self::new(1000)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn poisoned() -> StoreError {
        StoreError::Unavailable("in-memory search log lock poisoned".to_string())
    }
}

impl Default for MemorySearchLog {
    fn default() -> Self {
        Self::with_default_size()
    }
}

#[async_trait]
impl SearchLog for MemorySearchLog {
    async fn record(&self, city: &str, time: NaiveDateTime) -> Result<(), StoreError> {
        let mut records = self.records.write().map_err(|_| Self::poisoned())?;

        if records.len() >= self.max_size {
            records.pop_front();
        }

        records.push_back(SearchRecord::new(city, time));
        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<SearchRecord>, StoreError> {
        let records = self.records.read().map_err(|_| Self::poisoned())?;

        let mut sorted: Vec<SearchRecord> = records.iter().cloned().collect();
        // stable sort keeps later inserts first among equal timestamps
        sorted.reverse();
        sorted.sort_by(|a, b| b.time.cmp(&a.time));
        sorted.truncate(limit);

        Ok(sorted)
    }
}
