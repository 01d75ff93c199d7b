use crate::{ConfigError, ConfigErrorResult, DEFAULT_SESSION_FILENAME};

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    /// JSON file inside the config directory, survives restarts.
    #[default]
    File,
    /// Process-local, gone on exit.
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown storage backend '{other}'")),
        }
    }
}

/// Where the session mirror lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// File name relative to the config directory
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: String::from(DEFAULT_SESSION_FILENAME),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.backend == StorageBackend::Memory {
            return Ok(());
        }

        if self.path.trim().is_empty() {
            return Err(ConfigError::storage("storage.path must not be empty"));
        }

        if Path::new(&self.path).is_absolute() || self.path.contains("..") {
            return Err(ConfigError::storage(
                "storage.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
