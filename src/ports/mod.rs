pub mod search_log;
pub mod weather_gateway;

pub use search_log::{SearchLog, StoreError};
pub use weather_gateway::{GatewayError, WeatherGateway};
