use crate::{
    CURRENT_SCHEMA_VERSION, DurableStorage, LEGACY_REFRESH_TOKEN_KEY, LEGACY_TOKEN_KEYS,
    LEGACY_USER_KEY, LoadResult, PersistedSession, SESSION_KEY, StorageResult,
};

use bd_core::{Session, User};

use std::sync::Arc;

use log::{info, warn};

/// Reads and writes the session mirror on top of a [`DurableStorage`].
///
/// There is exactly one record. Clearing removes it together with every
/// legacy key so a half-cleared state can never be read back.
#[derive(Clone)]
pub struct SessionRepository {
    storage: Arc<dyn DurableStorage>,
}

impl SessionRepository {
    pub fn new(storage: Arc<dyn DurableStorage>) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &Arc<dyn DurableStorage> {
        &self.storage
    }

    /// Load the stored session.
    ///
    /// Returns:
    /// - `session: Some(..)` - a usable record (possibly migrated from legacy keys)
    /// - `session: None, corruption_error: None` - nothing stored
    /// - `session: None, corruption_error: Some(..)` - record was unusable and has been cleared
    pub async fn load(&self) -> StorageResult<LoadResult> {
        let Some(raw) = self.storage.get(SESSION_KEY).await? else {
            return self.migrate_legacy().await;
        };

        let persisted = match serde_json::from_str::<PersistedSession>(&raw) {
            Ok(persisted) => persisted,
            Err(e) => {
                warn!("Stored session is corrupted: {e}");
                self.clear().await?;
                return Ok(LoadResult {
                    corruption_error: Some(e.to_string()),
                    ..Default::default()
                });
            }
        };

        if persisted.schema_version > CURRENT_SCHEMA_VERSION {
            let message = format!(
                "Stored session has schema v{}, this client understands up to v{}",
                persisted.schema_version, CURRENT_SCHEMA_VERSION
            );
            warn!("{message}");
            self.clear().await?;
            return Ok(LoadResult {
                corruption_error: Some(message),
                ..Default::default()
            });
        }

        if persisted.access_token.is_empty() {
            self.clear().await?;
            return Ok(LoadResult::default());
        }

        Ok(LoadResult {
            session: Some(persisted.into()),
            ..Default::default()
        })
    }

    /// Token for the next outgoing request, read from storage every call.
    pub async fn access_token(&self) -> StorageResult<Option<String>> {
        Ok(self.load().await?.session.map(|s| s.access_token))
    }

    pub async fn save(&self, session: &Session) -> StorageResult<()> {
        let json = serde_json::to_string(&PersistedSession::from(session))?;
        self.storage.set(SESSION_KEY, &json).await
    }

    pub async fn clear(&self) -> StorageResult<()> {
        self.storage.remove(SESSION_KEY).await?;
        self.remove_legacy_keys().await
    }

    async fn migrate_legacy(&self) -> StorageResult<LoadResult> {
        let mut token = None;
        for key in LEGACY_TOKEN_KEYS {
            if let Some(value) = self.storage.get(key).await?
                && !value.is_empty()
            {
                token = Some(value);
                break;
            }
        }

        let Some(access_token) = token else {
            // Leftover refresh token or profile without an access token is unusable.
            self.remove_legacy_keys().await?;
            return Ok(LoadResult::default());
        };

        let refresh_token = self
            .storage
            .get(LEGACY_REFRESH_TOKEN_KEY)
            .await?
            .filter(|t| !t.is_empty());

        let user = match self.storage.get(LEGACY_USER_KEY).await? {
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!("Dropping unreadable legacy profile: {e}");
                    None
                }
            },
            None => None,
        };

        let session = Session::new(access_token, refresh_token, user);
        self.save(&session).await?;
        self.remove_legacy_keys().await?;

        info!("Migrated legacy session keys to '{SESSION_KEY}'");
        Ok(LoadResult {
            session: Some(session),
            corruption_error: None,
            migrated: true,
        })
    }

    async fn remove_legacy_keys(&self) -> StorageResult<()> {
        for key in LEGACY_TOKEN_KEYS {
            self.storage.remove(key).await?;
        }
        self.storage.remove(LEGACY_REFRESH_TOKEN_KEY).await?;
        self.storage.remove(LEGACY_USER_KEY).await
    }
}
