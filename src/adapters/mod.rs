pub mod openweather;
pub mod store;

pub use openweather::OpenWeatherClient;
pub use store::{MemorySearchLog, MySqlSearchLog};
