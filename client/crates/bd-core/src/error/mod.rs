pub mod error_kind;

// -------------------------------------------------------------------------- //

use crate::{ErrorKind, ErrorLocation};

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid card type: {value} {location}")]
    InvalidCardType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid transaction type: {value} {location}")]
    InvalidTransactionType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid card id: {source} {location}")]
    InvalidCardId {
        source: uuid::Error,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Every core error is a problem with caller-supplied input.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::ValidationFailure
    }

    /// Message suitable for a store's error field, without the source location.
    pub fn display_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::InvalidCardType { value, .. } => format!("Unknown card provider: {value}"),
            Self::InvalidTransactionType { value, .. } => {
                format!("Unknown transaction type: {value}")
            }
            Self::InvalidCardId { source, .. } => format!("Invalid card id: {source}"),
        }
    }
}

pub type CoreResult<T> = StdResult<T, CoreError>;
