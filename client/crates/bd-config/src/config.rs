use crate::{
    ApiConfig, AuthConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR_NAME, FetchConfig, FixturesConfig, LoggingConfig, StorageBackend,
    StorageConfig,
};

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub auth: AuthConfig,
    pub storage: StorageConfig,
    pub fixtures: FixturesConfig,
    pub fetch: FetchConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for BD_CONFIG_DIR env var, else use ./.bankdash/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply BD_* environment variable overrides
    /// 5. Check for a home-directory config.toml that is being ignored and warn
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        Self::warn_ignored_home_config(&config_dir);

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: BD_CONFIG_DIR env var > ./.bankdash/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    fn warn_ignored_home_config(config_dir: &Path) {
        let Some(home) = dirs::home_dir() else {
            return;
        };

        let home_dir = home.join(DEFAULT_CONFIG_DIR_NAME);
        if home_dir != config_dir && home_dir.join(CONFIG_FILE_NAME).exists() {
            warn!(
                "Ignoring {} (config is read from {})",
                home_dir.join(CONFIG_FILE_NAME).display(),
                config_dir.display()
            );
        }
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.storage.validate()?;
        self.fixtures.validate()?;
        self.fetch.validate()?;

        Ok(())
    }

    /// Absolute path of the session file, `None` for the memory backend.
    pub fn session_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.storage.backend {
            StorageBackend::Memory => Ok(None),
            StorageBackend::File => Ok(Some(Self::config_dir()?.join(&self.storage.path))),
        }
    }

    /// Fixture directory, relative paths resolved against the config dir.
    pub fn fixtures_dir(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(dir) = &self.fixtures.dir else {
            return Ok(None);
        };

        let dir = PathBuf::from(dir);
        if dir.is_absolute() {
            return Ok(Some(dir));
        }
        Ok(Some(Self::config_dir()?.join(dir)))
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  api: {} (timeout {}ms)",
            self.api.base_url, self.api.timeout_ms
        );
        info!("  auth: on 401 {}", self.auth.unauthorized_policy);

        match self.storage.backend {
            StorageBackend::File => info!("  storage: file ({})", self.storage.path),
            StorageBackend::Memory => info!("  storage: memory"),
        }

        info!(
            "  fixtures: {} (delay {}-{}ms)",
            self.fixtures.dir.as_deref().unwrap_or("bundled"),
            self.fixtures.min_delay_ms,
            self.fixtures.max_delay_ms
        );
        info!("  fetch: timeout={}ms", self.fetch.timeout_ms);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_string("BD_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_parse("BD_API_TIMEOUT_MS", &mut self.api.timeout_ms);

        // Auth
        Self::apply_env_parse(
            "BD_AUTH_UNAUTHORIZED_POLICY",
            &mut self.auth.unauthorized_policy,
        );

        // Storage
        Self::apply_env_parse("BD_STORAGE_BACKEND", &mut self.storage.backend);
        Self::apply_env_string("BD_STORAGE_PATH", &mut self.storage.path);

        // Fixtures
        Self::apply_env_option_string("BD_FIXTURES_DIR", &mut self.fixtures.dir);
        Self::apply_env_parse(
            "BD_FIXTURES_MIN_DELAY_MS",
            &mut self.fixtures.min_delay_ms,
        );
        Self::apply_env_parse(
            "BD_FIXTURES_MAX_DELAY_MS",
            &mut self.fixtures.max_delay_ms,
        );

        // Fetch
        Self::apply_env_parse("BD_FETCH_TIMEOUT_MS", &mut self.fetch.timeout_ms);

        // Logging
        Self::apply_env_parse("BD_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("BD_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("BD_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values.
    /// Unparseable values are ignored with a warning.
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name) {
            match val.parse() {
                Ok(parsed) => *target = parsed,
                Err(_) => warn!("Ignoring unparseable {var_name}={val}"),
            }
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
