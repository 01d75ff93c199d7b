use bd_api::ClientError;
use bd_cards::CardsError;
use bd_config::ConfigError;
use bd_session::SessionError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {source} {location}")]
    Config {
        #[source]
        source: ConfigError,
        location: ErrorLocation,
    },

    #[error("HTTP client setup failed: {source} {location}")]
    Client {
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },

    #[error("{source}")]
    Session {
        #[from]
        source: SessionError,
    },

    #[error("{source}")]
    Cards {
        #[from]
        source: CardsError,
    },

    #[error("No card at position {position} {location}")]
    NoCardAt {
        position: usize,
        location: ErrorLocation,
    },

    #[error("Failed to initialize logger: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to encode output: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn no_card_at(position: usize) -> Self {
        Self::NoCardAt {
            position,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Short message for the terminal; the full chain goes to the log.
    pub fn display_message(&self) -> String {
        match self {
            Self::Config { source, .. } => source.to_string(),
            Self::Client { source, .. } => source.display_message(),
            Self::Session { source } => source.display_message(),
            Self::Cards { source } => source.display_message(),
            Self::NoCardAt { position, .. } => format!("No card at position {position}"),
            Self::Logger { message, .. } => message.clone(),
            Self::Json { source, .. } => source.to_string(),
        }
    }
}

impl From<ConfigError> for CliError {
    #[track_caller]
    fn from(source: ConfigError) -> Self {
        Self::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ClientError> for CliError {
    #[track_caller]
    fn from(source: ClientError) -> Self {
        Self::Client {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type CliResult<T> = std::result::Result<T, CliError>;
