use bd_core::{Session, User};

use serde::{Deserialize, Serialize};

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// On-disk shape of the session mirror.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub schema_version: u32,
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

impl From<&Session> for PersistedSession {
    fn from(session: &Session) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            access_token: session.access_token.clone(),
            refresh_token: session.refresh_token.clone(),
            user: session.user.clone(),
        }
    }
}

impl From<PersistedSession> for Session {
    fn from(persisted: PersistedSession) -> Self {
        Session::new(
            persisted.access_token,
            persisted.refresh_token,
            persisted.user,
        )
    }
}

impl std::fmt::Debug for PersistedSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistedSession")
            .field("schema_version", &self.schema_version)
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}
