use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Number of entries served by the recent-searches query
pub const RECENT_SEARCH_LIMIT: usize = 5;

/// One logged city lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    pub city: String,
    pub time: NaiveDateTime, // server clock, whole seconds
}

impl SearchRecord {
    pub fn new(city: impl Into<String>, time: NaiveDateTime) -> Self {
        Self {
            city: city.into(),
            time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_serializes_city_and_time_only() {
        let time = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 30, 5)
            .unwrap();
        let record = SearchRecord::new("Oslo", time);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "city": "Oslo", "time": "2024-03-01T09:30:05" })
        );
    }
}
