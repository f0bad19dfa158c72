use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::domain::WeatherSnapshot;
use crate::ports::{GatewayError, WeatherGateway};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

/// Shown when a 404 body carries no message of its own
const CITY_NOT_FOUND: &str = "City not found";

/// Error body returned by OpenWeatherMap, e.g. `{"cod":"404","message":"city not found"}`
#[derive(Debug, Deserialize)]
struct OwErrorBody {
    message: Option<String>,
}

/// OpenWeatherMap adapter using reqwest
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    fn not_found_message(body: &str) -> String {
        serde_json::from_str::<OwErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| CITY_NOT_FOUND.to_string())
    }
}

#[async_trait]
impl WeatherGateway for OpenWeatherClient {
    async fn fetch_weather(&self, city: &str) -> Result<WeatherSnapshot, GatewayError> {
        let url = format!("{}{}", self.base_url, CURRENT_WEATHER_PATH);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("units", "metric"),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| GatewayError::Upstream(e.to_string()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| GatewayError::Upstream(format!("failed to read response body: {e}")))?;

        debug!("OpenWeather answered {} for {:?}", status, city);

        if status == StatusCode::NOT_FOUND {
            return Err(GatewayError::NotFound(Self::not_found_message(&body)));
        }

        if !status.is_success() {
            return Err(GatewayError::Upstream(format!("status {status}")));
        }

        let payload: Value = serde_json::from_str(&body)
            .map_err(|e| GatewayError::Upstream(format!("malformed response: {e}")))?;

        Ok(WeatherSnapshot::new(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn london() -> Value {
        json!({
            "name": "London",
            "weather": [{ "main": "Clouds" }],
            "main": { "temp": 15.2, "humidity": 70 }
        })
    }

    #[tokio::test]
    async fn test_returns_payload_unmodified() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("q", "London"))
            .and(query_param("units", "metric"))
            .and(query_param("appid", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(london()))
            .expect(1)
            .mount(&server)
            .await;

        let client = OpenWeatherClient::with_base_url(server.uri(), "test-key");
        let snapshot = client.fetch_weather("London").await.unwrap();

        assert_eq!(serde_json::to_value(&snapshot).unwrap(), london());
    }

    #[tokio::test]
    async fn test_city_is_sent_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("q", "São Paulo,BR"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "São Paulo" })))
            .expect(1)
            .mount(&server)
            .await;

        let client = OpenWeatherClient::with_base_url(format!("{}/", server.uri()), "k");
        let snapshot = client.fetch_weather("São Paulo,BR").await.unwrap();

        assert_eq!(snapshot.location_name(), Some("São Paulo"));
    }

    #[tokio::test]
    async fn test_404_maps_to_not_found_with_provider_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({ "cod": "404", "message": "city not found" })),
            )
            .mount(&server)
            .await;

        let client = OpenWeatherClient::with_base_url(server.uri(), "k");
        let err = client.fetch_weather("Atlantis").await.unwrap_err();

        assert!(matches!(err, GatewayError::NotFound(ref msg) if msg == "city not found"));
    }

    #[tokio::test]
    async fn test_404_without_message_uses_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("nope"))
            .mount(&server)
            .await;

        let client = OpenWeatherClient::with_base_url(server.uri(), "k");
        let err = client.fetch_weather("Atlantis").await.unwrap_err();

        assert!(matches!(err, GatewayError::NotFound(ref msg) if msg == "City not found"));
    }

    #[tokio::test]
    async fn test_other_statuses_are_upstream_failures() {
        for status in [401u16, 429, 500, 503] {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(status).set_body_json(json!({ "message": "boom" })))
                .mount(&server)
                .await;

            let client = OpenWeatherClient::with_base_url(server.uri(), "k");
            let err = client.fetch_weather("London").await.unwrap_err();

            assert!(matches!(err, GatewayError::Upstream(_)), "status {status} gave {err:?}");
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_upstream_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = OpenWeatherClient::with_base_url(server.uri(), "k");
        let err = client.fetch_weather("London").await.unwrap_err();

        assert!(matches!(err, GatewayError::Upstream(_)));
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_upstream_failure() {
        // Port 9 (discard) is not listening on the loopback in test environments
        let client = OpenWeatherClient::with_base_url("http://127.0.0.1:9", "k");
        let err = client.fetch_weather("London").await.unwrap_err();

        assert!(matches!(err, GatewayError::Upstream(_)));
    }
}
