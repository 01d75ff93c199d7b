use crate::{CoreError, CoreResult};

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Only checks that both fields are filled in. Whether they are correct
    /// is for the auth service to decide.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if self.email.trim().is_empty() {
            return Err(CoreError::validation("email", "Email is required"));
        }
        if self.password.is_empty() {
            return Err(CoreError::validation("password", "Password is required"));
        }
        Ok(())
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
