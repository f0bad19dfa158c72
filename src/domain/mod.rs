pub mod search;
pub mod theme;
pub mod weather;

pub use search::{SearchRecord, RECENT_SEARCH_LIMIT};
pub use theme::Theme;
pub use weather::WeatherSnapshot;
