use crate::{CardsDataSource, CardsError, CardsResult};

use bd_config::FixturesConfig;
use bd_core::{CardDetail, Transaction, UserData};

use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;

pub const DEBIT_CARDS_FIXTURE: &str = "debit_cards.json";
pub const TRANSACTIONS_FIXTURE: &str = "transactions.json";
pub const USER_DATA_FIXTURE: &str = "user_data.json";

const BUNDLED_DEBIT_CARDS: &str = include_str!("../fixtures/debit_cards.json");
const BUNDLED_TRANSACTIONS: &str = include_str!("../fixtures/transactions.json");
const BUNDLED_USER_DATA: &str = include_str!("../fixtures/user_data.json");

/// Serves the cards page from static JSON after a simulated network delay.
///
/// With no directory configured the copies compiled into the crate are used.
/// A directory is read on every fetch, so edits show up without a restart.
#[derive(Debug, Clone)]
pub struct FixtureCardsService {
    dir: Option<PathBuf>,
    delay_ms: RangeInclusive<u64>,
}

impl FixtureCardsService {
    pub fn new(dir: Option<PathBuf>, delay_ms: RangeInclusive<u64>) -> Self {
        Self { dir, delay_ms }
    }

    /// `dir` is the resolved fixtures directory, see `Config::fixtures_dir`.
    pub fn from_config(config: &FixturesConfig, dir: Option<PathBuf>) -> Self {
        Self::new(dir, config.delay_range_ms())
    }

    pub fn bundled() -> Self {
        Self::from_config(&FixturesConfig::default(), None)
    }

    pub fn with_delay(mut self, delay_ms: RangeInclusive<u64>) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn dir(&self) -> Option<&PathBuf> {
        self.dir.as_ref()
    }

    fn next_delay(&self) -> Duration {
        let (min, max) = (*self.delay_ms.start(), *self.delay_ms.end());
        let millis = if max > min {
            rand::random_range(min..=max)
        } else {
            min
        };
        Duration::from_millis(millis)
    }

    async fn load<T: DeserializeOwned>(&self, name: &str, bundled: &str) -> CardsResult<T> {
        let delay = self.next_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        match &self.dir {
            Some(dir) => {
                let path = dir.join(name);
                debug!("Reading fixture {}", path.display());
                let raw = tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|source| CardsError::fixture_read(&path, source))?;
                serde_json::from_str(&raw).map_err(|source| CardsError::fixture_parse(name, source))
            }
            None => serde_json::from_str(bundled)
                .map_err(|source| CardsError::fixture_parse(name, source)),
        }
    }
}

impl Default for FixtureCardsService {
    fn default() -> Self {
        Self::bundled()
    }
}

#[async_trait]
impl CardsDataSource for FixtureCardsService {
    async fn fetch_debit_cards(&self) -> CardsResult<Vec<CardDetail>> {
        self.load(DEBIT_CARDS_FIXTURE, BUNDLED_DEBIT_CARDS).await
    }

    async fn fetch_transactions(&self) -> CardsResult<Vec<Transaction>> {
        self.load(TRANSACTIONS_FIXTURE, BUNDLED_TRANSACTIONS).await
    }

    async fn fetch_user_data(&self) -> CardsResult<UserData> {
        self.load(USER_DATA_FIXTURE, BUNDLED_USER_DATA).await
    }
}
