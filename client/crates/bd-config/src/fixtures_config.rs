use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_FIXTURE_MAX_DELAY_MS, DEFAULT_FIXTURE_MIN_DELAY_MS,
};

use std::ops::RangeInclusive;

use serde::Deserialize;

pub const MAX_FIXTURE_DELAY_MS: u64 = 10_000;

/// Static dashboard data and the latency simulated before serving it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FixturesConfig {
    /// Directory holding `debit_cards.json`, `transactions.json` and
    /// `user_data.json`. `None` serves the bundled copies.
    pub dir: Option<String>,
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for FixturesConfig {
    fn default() -> Self {
        Self {
            dir: None,
            min_delay_ms: DEFAULT_FIXTURE_MIN_DELAY_MS,
            max_delay_ms: DEFAULT_FIXTURE_MAX_DELAY_MS,
        }
    }
}

impl FixturesConfig {
    pub fn delay_range_ms(&self) -> RangeInclusive<u64> {
        self.min_delay_ms..=self.max_delay_ms
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.min_delay_ms > self.max_delay_ms {
            return Err(ConfigError::fixtures(format!(
                "fixtures.min_delay_ms ({}) must not exceed fixtures.max_delay_ms ({})",
                self.min_delay_ms, self.max_delay_ms
            )));
        }

        if self.max_delay_ms > MAX_FIXTURE_DELAY_MS {
            return Err(ConfigError::fixtures(format!(
                "fixtures.max_delay_ms must be at most {}, got {}",
                MAX_FIXTURE_DELAY_MS, self.max_delay_ms
            )));
        }

        if let Some(dir) = &self.dir
            && dir.trim().is_empty()
        {
            return Err(ConfigError::fixtures("fixtures.dir must not be empty"));
        }

        Ok(())
    }
}
