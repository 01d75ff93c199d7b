use crate::{CoreError, CoreResult};

use std::fmt;

use serde::{Deserialize, Serialize};

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Registration form. The confirmation field is checked locally and never
/// sent over the wire.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterData {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing, default)]
    pub password_confirmation: String,
}

impl RegisterData {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        password_confirmation: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            password_confirmation: password_confirmation.into(),
        }
    }

    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::validation("name", "Name is required"));
        }
        if self.email.trim().is_empty() {
            return Err(CoreError::validation("email", "Email is required"));
        }
        if !self.email.contains('@') {
            return Err(CoreError::validation(
                "email",
                "Please enter a valid email address",
            ));
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(CoreError::validation(
                "password",
                format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
            ));
        }
        if self.password != self.password_confirmation {
            return Err(CoreError::validation(
                "password_confirmation",
                "Passwords do not match",
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for RegisterData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterData")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}
