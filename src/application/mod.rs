pub mod lookup;

pub use lookup::{LookupError, WeatherService};
