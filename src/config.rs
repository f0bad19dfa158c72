use std::env;
use std::fmt;

use crate::adapters::openweather::DEFAULT_BASE_URL;

/// Port the HTTP server listens on
pub const PORT: u16 = 5000;

const DEFAULT_DB_PORT: u16 = 3306;

/// Connection parameters for the search log database
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .finish()
    }
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    /// `None` when `DB_HOST` is unset; searches are then kept in memory
    pub database: Option<DatabaseConfig>,
    pub openweather_api_key: String,
    pub openweather_base_url: String,
    pub log_level: String,
}

impl Config {
    /// Read configuration from the environment, after loading `.env` if present
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = var("DB_HOST").filter(|h| !h.is_empty()).map(|host| DatabaseConfig {
            host,
            port: var("DB_PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_DB_PORT),
            user: var("DB_USER").unwrap_or_default(),
            password: var("DB_PASSWORD").unwrap_or_default(),
            name: var("DB_NAME").unwrap_or_default(),
        });

        Self {
            database,
            openweather_api_key: var("OPENWEATHER_API_KEY").unwrap_or_default(),
            openweather_base_url: var("OPENWEATHER_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            log_level: var("WEATHERLOG_LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api_key = if self.openweather_api_key.is_empty() {
            "<unset>"
        } else {
            "<redacted>"
        };

        f.debug_struct("Config")
            .field("port", &PORT)
            .field("database", &self.database)
            .field("openweather_api_key", &api_key)
            .field("openweather_base_url", &self.openweather_base_url)
            .field("log_level", &self.log_level)
            .finish()
    }
}
