use bd_core::ErrorKind;
use bd_storage::StorageError;

use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (status: {status}, code: {code}) {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Unauthorized: session rejected by server {location}")]
    Unauthorized { location: ErrorLocation },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Session storage error: {source} {location}")]
    Storage {
        location: ErrorLocation,
        #[source]
        source: StorageError,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api_error(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        ClientError::Api {
            status,
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized() -> Self {
        ClientError::Unauthorized {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Unauthorized { .. } => ErrorKind::AuthExpiry,
            Self::Api { status, .. } if is_client_error(*status) => ErrorKind::ValidationFailure,
            Self::Api { .. } | Self::Http { .. } | Self::Json { .. } | Self::Storage { .. } => {
                ErrorKind::TransientFetchFailure
            }
        }
    }

    /// Server-provided message when there is one, else a short description.
    pub fn display_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Unauthorized { .. } => "Your session has expired. Please sign in again.".into(),
            Self::Http { source, .. } if source.is_timeout() => "Request timed out".into(),
            Self::Http { source, .. } if source.is_connect() => {
                "Unable to reach the server".into()
            }
            Self::Http { message, .. } => format!("Network error: {message}"),
            Self::Json { .. } => "Unexpected response from server".into(),
            Self::Storage { source, .. } => source.display_message(),
        }
    }

    /// Server-provided message, falling back to `fallback` for transport
    /// failures where the server never answered.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            Self::Api { message, .. } if !message.is_empty() => message.clone(),
            Self::Api { .. } | Self::Http { .. } | Self::Json { .. } => fallback.to_string(),
            Self::Unauthorized { .. } | Self::Storage { .. } => self.display_message(),
        }
    }
}

/// 4xx other than timeout/rate limiting means the request itself was wrong.
fn is_client_error(status: u16) -> bool {
    (400..500).contains(&status) && status != 408 && status != 429
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

impl From<StorageError> for ClientError {
    #[track_caller]
    fn from(source: StorageError) -> Self {
        ClientError::Storage {
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
