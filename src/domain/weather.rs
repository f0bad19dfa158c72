use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Current weather for one city, exactly as the provider returned it.
///
/// The payload is passed through to callers untouched; the accessors only
/// read the handful of fields the service itself cares about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherSnapshot(Value);

impl WeatherSnapshot {
    pub fn new(payload: Value) -> Self {
        Self(payload)
    }

    pub fn location_name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// Condition category such as "Clear", "Rain" or "Clouds"
    pub fn condition(&self) -> Option<&str> {
        self.0.pointer("/weather/0/main").and_then(Value::as_str)
    }

    /// Temperature in Celsius
    pub fn temperature(&self) -> Option<f64> {
        self.0.pointer("/main/temp").and_then(Value::as_f64)
    }

    /// Relative humidity in percent
    pub fn humidity(&self) -> Option<f64> {
        self.0.pointer("/main/humidity").and_then(Value::as_f64)
    }
}
