use bd_api::ClientError;
use bd_core::{CoreError, ErrorKind};
use bd_storage::StorageError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Invalid input: {source} {location}")]
    Validation {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Auth request failed: {source} {location}")]
    Api {
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },

    #[error("Session storage failed: {source} {location}")]
    Storage {
        #[source]
        source: StorageError,
        location: ErrorLocation,
    },

    #[error("Not signed in {location}")]
    NotAuthenticated { location: ErrorLocation },

    #[error("No profile loaded {location}")]
    NoProfile { location: ErrorLocation },

    #[error("No refresh token available {location}")]
    NoRefreshToken { location: ErrorLocation },

    #[error("Session expired: {message} {location}")]
    AuthExpired {
        message: String,
        location: ErrorLocation,
    },
}

impl SessionError {
    #[track_caller]
    pub fn not_authenticated() -> Self {
        Self::NotAuthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn no_profile() -> Self {
        Self::NoProfile {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn no_refresh_token() -> Self {
        Self::NoRefreshToken {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn auth_expired(message: impl Into<String>) -> Self {
        Self::AuthExpired {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { source, .. } => source.kind(),
            Self::Api { source, .. } => source.kind(),
            Self::Storage { source, .. } => source.kind(),
            Self::NotAuthenticated { .. } | Self::NoProfile { .. } => ErrorKind::ValidationFailure,
            Self::NoRefreshToken { .. } | Self::AuthExpired { .. } => ErrorKind::AuthExpiry,
        }
    }

    pub fn display_message(&self) -> String {
        match self {
            Self::Validation { source, .. } => source.display_message(),
            Self::Api { source, .. } => source.display_message(),
            Self::Storage { source, .. } => source.display_message(),
            Self::NotAuthenticated { .. } => "You are not signed in".to_string(),
            Self::NoProfile { .. } => "No user profile loaded".to_string(),
            Self::NoRefreshToken { .. } => "No refresh token available".to_string(),
            Self::AuthExpired { message, .. } => message.clone(),
        }
    }
}

impl From<CoreError> for SessionError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Validation {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ClientError> for SessionError {
    #[track_caller]
    fn from(source: ClientError) -> Self {
        Self::Api {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StorageError> for SessionError {
    #[track_caller]
    fn from(source: StorageError) -> Self {
        Self::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type SessionResult<T> = std::result::Result<T, SessionError>;
