use crate::Collection;

use bd_core::{CardId, CoreError, ErrorKind};

use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardsError {
    #[error("Card not found: {id} {location}")]
    CardNotFound { id: CardId, location: ErrorLocation },

    #[error("Invalid card: {source} {location}")]
    Validation {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Failed to read fixture {path}: {source} {location}")]
    FixtureRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to parse fixture {name}: {source} {location}")]
    FixtureParse {
        name: String,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Fetching {collection} timed out after {timeout_ms}ms {location}")]
    Timeout {
        collection: Collection,
        timeout_ms: u64,
        location: ErrorLocation,
    },

    #[error("Fetch of {collection} was superseded {location}")]
    Superseded {
        collection: Collection,
        location: ErrorLocation,
    },

    #[error("Data source failed: {message} {location}")]
    Upstream {
        message: String,
        location: ErrorLocation,
    },
}

impl CardsError {
    #[track_caller]
    pub fn card_not_found(id: CardId) -> Self {
        Self::CardNotFound {
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn fixture_read(path: &Path, source: std::io::Error) -> Self {
        Self::FixtureRead {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn fixture_parse(name: impl Into<String>, source: serde_json::Error) -> Self {
        Self::FixtureParse {
            name: name.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn timeout(collection: Collection, timeout_ms: u64) -> Self {
        Self::Timeout {
            collection,
            timeout_ms,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn superseded(collection: Collection) -> Self {
        Self::Superseded {
            collection,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Failure reported by a data source that is not fixture backed.
    #[track_caller]
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CardNotFound { .. })
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::CardNotFound { .. } | Self::Validation { .. } => ErrorKind::ValidationFailure,
            Self::FixtureRead { .. }
            | Self::FixtureParse { .. }
            | Self::Timeout { .. }
            | Self::Superseded { .. }
            | Self::Upstream { .. } => ErrorKind::TransientFetchFailure,
        }
    }

    pub fn display_message(&self) -> String {
        match self {
            Self::CardNotFound { .. } => "Card not found".to_string(),
            Self::Validation { source, .. } => source.display_message(),
            Self::FixtureRead { .. } | Self::FixtureParse { .. } | Self::Upstream { .. } => {
                "Unable to load dashboard data".to_string()
            }
            Self::Timeout { .. } => "Request timed out".to_string(),
            Self::Superseded { .. } => "Request was replaced by a newer one".to_string(),
        }
    }
}

impl From<CoreError> for CardsError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Validation {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type CardsResult<T> = std::result::Result<T, CardsError>;
