use crate::{ConfigError, ConfigErrorResult, DEFAULT_FETCH_TIMEOUT_MS};

use std::time::Duration;

use serde::Deserialize;

// Per-collection fetch constraints
pub const MIN_FETCH_TIMEOUT_MS: u64 = 100;
pub const MAX_FETCH_TIMEOUT_MS: u64 = 60_000;

/// Page store fetch behaviour.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Time a single collection fetch may take before it is failed
    pub timeout_ms: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
        }
    }
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.timeout_ms < MIN_FETCH_TIMEOUT_MS || self.timeout_ms > MAX_FETCH_TIMEOUT_MS {
            return Err(ConfigError::fetch(format!(
                "fetch.timeout_ms must be {}-{}, got {}",
                MIN_FETCH_TIMEOUT_MS, MAX_FETCH_TIMEOUT_MS, self.timeout_ms
            )));
        }

        Ok(())
    }
}
