mod api_config;
mod auth_config;
mod config;
mod error;
mod fetch_config;
mod fixtures_config;
mod log_level;
mod logging_config;
mod storage_config;
mod unauthorized_policy;

pub use api_config::{ApiConfig, MAX_API_TIMEOUT_MS, MIN_API_TIMEOUT_MS};
pub use auth_config::AuthConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use fetch_config::{FetchConfig, MAX_FETCH_TIMEOUT_MS, MIN_FETCH_TIMEOUT_MS};
pub use fixtures_config::{FixturesConfig, MAX_FIXTURE_DELAY_MS};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::{StorageBackend, StorageConfig};
pub use unauthorized_policy::UnauthorizedPolicy;

pub const CONFIG_DIR_ENV: &str = "BD_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR_NAME: &str = ".bankdash";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_API_BASE_URL: &str = "https://api.example.com";
pub const DEFAULT_API_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_FIXTURE_MIN_DELAY_MS: u64 = 200;
pub const DEFAULT_FIXTURE_MAX_DELAY_MS: u64 = 500;
pub const DEFAULT_SESSION_FILENAME: &str = "session.json";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

#[cfg(test)]
mod tests;
