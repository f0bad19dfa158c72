use serde::{Deserialize, Serialize};

/// Background theme the dashboard renders for a weather condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Clear,
    Cloudy,
    Rainy,
    Snowy,
    Thunderstorm,
    Default,
}

impl Theme {
    /// Map a provider condition category to a theme. Matching ignores case;
    /// unknown or missing categories get the default theme.
    pub fn from_condition(condition: Option<&str>) -> Self {
        let Some(condition) = condition else {
            return Self::Default;
        };

        match condition.to_lowercase().as_str() {
            "clear" => Self::Clear,
            "clouds" => Self::Cloudy,
            "rain" => Self::Rainy,
            "snow" => Self::Snowy,
            "thunderstorm" => Self::Thunderstorm,
            _ => Self::Default,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Cloudy => "cloudy",
            Self::Rainy => "rainy",
            Self::Snowy => "snowy",
            Self::Thunderstorm => "thunderstorm",
            Self::Default => "default",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
