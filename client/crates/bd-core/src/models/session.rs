use crate::User;

use serde::{Deserialize, Serialize};

/// Credential state held by the session store.
///
/// Holding a `Session` at all means holding an access token, so presence of
/// the session is the only authority for "authenticated". The profile may
/// lag behind the token until it is fetched.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

impl Session {
    pub fn new(access_token: String, refresh_token: Option<String>, user: Option<User>) -> Self {
        Self {
            access_token,
            refresh_token,
            user,
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }

    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.email.as_str())
    }

    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .field("has_refresh_token", &self.refresh_token.is_some())
            .field("user", &self.user)
            .finish()
    }
}
