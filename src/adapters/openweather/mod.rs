mod client;

pub use client::{OpenWeatherClient, DEFAULT_BASE_URL};
