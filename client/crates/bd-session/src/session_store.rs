use crate::{SessionError, SessionResult, SessionSnapshot};

use bd_api::{AuthApi, ClientError};
use bd_config::UnauthorizedPolicy;
use bd_core::{AuthResponse, LoginCredentials, ProfileUpdate, RegisterData, Session, User};
use bd_storage::SessionRepository;

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::RwLock;

const LOGIN_FAILED: &str = "Login failed";
const REGISTRATION_FAILED: &str = "Registration failed";
const LOGOUT_FAILED: &str = "Logout failed";
const REFRESH_FAILED: &str = "Token refresh failed";
const FETCH_USER_FAILED: &str = "Failed to get user";
const PROFILE_UPDATE_FAILED: &str = "Profile update failed";
const DELETE_ACCOUNT_FAILED: &str = "Failed to delete account";
const SESSION_EXPIRED: &str = "Your session has expired. Please sign in again.";

#[derive(Debug, Default)]
struct SessionState {
    session: Option<Session>,
    /// Set once the current token has been accepted by the server. Cleared
    /// when a token is hydrated from storage without being checked.
    validated: bool,
    in_flight: usize,
    error: Option<String>,
}

/// Owns the credential state and keeps durable storage mirroring it.
///
/// The lock is never held across an await: operations read what they need,
/// release, call out, then re-acquire to publish. Two overlapping operations
/// therefore resolve last-write-wins.
pub struct SessionStore {
    api: Arc<dyn AuthApi>,
    repository: SessionRepository,
    unauthorized_policy: UnauthorizedPolicy,
    state: RwLock<SessionState>,
}

impl SessionStore {
    pub fn new(
        api: Arc<dyn AuthApi>,
        repository: SessionRepository,
        unauthorized_policy: UnauthorizedPolicy,
    ) -> Self {
        Self {
            api,
            repository,
            unauthorized_policy,
            state: RwLock::new(SessionState::default()),
        }
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.session.is_some()
    }

    pub async fn current_user(&self) -> Option<User> {
        self.state
            .read()
            .await
            .session
            .as_ref()
            .and_then(|s| s.user.clone())
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.in_flight > 0
    }

    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    pub async fn clear_error(&self) {
        self.state.write().await.error = None;
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.read().await;
        SessionSnapshot {
            is_authenticated: state.session.is_some(),
            user: state.session.as_ref().and_then(|s| s.user.clone()),
            has_refresh_token: state
                .session
                .as_ref()
                .is_some_and(|s| s.refresh_token.is_some()),
            is_validated: state.validated,
            is_loading: state.in_flight > 0,
            error: state.error.clone(),
        }
    }

    // =========================================================================
    // Credential exchange
    // =========================================================================

    /// Sign in. On failure the previous session, if any, is left as it was.
    pub async fn login(&self, credentials: &LoginCredentials) -> SessionResult<User> {
        self.begin().await;
        let result = self.login_inner(credentials).await;
        self.finish(&result, LOGIN_FAILED).await;
        result
    }

    async fn login_inner(&self, credentials: &LoginCredentials) -> SessionResult<User> {
        credentials.validate()?;
        let response = self.api.login(credentials).await?;
        info!("Signed in as {}", response.user.id);
        self.establish(response).await
    }

    /// Create an account and sign in with it.
    pub async fn register(&self, data: &RegisterData) -> SessionResult<User> {
        self.begin().await;
        let result = self.register_inner(data).await;
        self.finish(&result, REGISTRATION_FAILED).await;
        result
    }

    async fn register_inner(&self, data: &RegisterData) -> SessionResult<User> {
        data.validate()?;
        let response = self.api.register(data).await?;
        info!("Registered {}", response.user.id);
        self.establish(response).await
    }

    /// Mirror first, publish second: a session that could not be persisted
    /// never becomes visible.
    async fn establish(&self, response: AuthResponse) -> SessionResult<User> {
        let user = response.user.clone();
        let session = Session::from(response);
        self.repository.save(&session).await?;

        let mut state = self.state.write().await;
        state.session = Some(session);
        state.validated = true;
        Ok(user)
    }

    // =========================================================================
    // Teardown
    // =========================================================================

    /// Sign out. Local state and storage are cleared whatever the server
    /// says; a remote failure is only reported in the error field.
    pub async fn logout(&self) -> SessionResult<()> {
        self.begin().await;

        let had_session = self.state.read().await.session.is_some();
        let remote = if had_session {
            self.api.logout().await
        } else {
            Ok(())
        };

        let cleared = self.clear_local().await;

        let mut state = self.state.write().await;
        state.in_flight = state.in_flight.saturating_sub(1);
        if let Err(e) = &remote {
            warn!("Remote logout failed, signed out locally: {e}");
            state.error = Some(e.message_or(LOGOUT_FAILED));
        }
        if let Err(e) = &cleared {
            state.error = Some(e.display_message());
        }
        drop(state);

        info!("Signed out");
        cleared
    }

    pub async fn delete_account(&self) -> SessionResult<()> {
        self.begin().await;
        let result = self.delete_account_inner().await;
        self.finish(&result, DELETE_ACCOUNT_FAILED).await;
        result
    }

    async fn delete_account_inner(&self) -> SessionResult<()> {
        self.require_session().await?;
        self.call(self.api.delete_account()).await?;
        self.clear_local().await?;
        info!("Account deleted");
        Ok(())
    }

    /// Drop everything: memory first, then storage.
    async fn clear_local(&self) -> SessionResult<()> {
        {
            let mut state = self.state.write().await;
            state.session = None;
            state.validated = false;
        }
        self.repository.clear().await?;
        Ok(())
    }

    // =========================================================================
    // Token lifecycle
    // =========================================================================

    /// Exchange the refresh token for a new access token. Any failure,
    /// including having no refresh token, ends the session.
    pub async fn refresh_access_token(&self) -> SessionResult<()> {
        self.begin().await;
        let result = self.refresh_inner().await;
        self.finish(&result, REFRESH_FAILED).await;
        result
    }

    async fn refresh_inner(&self) -> SessionResult<()> {
        let refresh_token = self
            .state
            .read()
            .await
            .session
            .as_ref()
            .and_then(|s| s.refresh_token.clone());

        let Some(refresh_token) = refresh_token else {
            self.clear_local().await?;
            return Err(SessionError::no_refresh_token());
        };

        let refreshed = match self.api.refresh_token(&refresh_token).await {
            Ok(refreshed) => refreshed,
            Err(e) => {
                warn!("Token refresh rejected, signing out: {e}");
                self.clear_local().await?;
                return Err(SessionError::auth_expired(e.message_or(REFRESH_FAILED)));
            }
        };

        let session = {
            let state = self.state.read().await;
            let Some(current) = state.session.as_ref() else {
                // Logged out while the refresh was in flight.
                return Err(SessionError::not_authenticated());
            };
            Session::new(
                refreshed.token,
                refreshed.refresh_token.or_else(|| current.refresh_token.clone()),
                current.user.clone(),
            )
        };

        self.repository.save(&session).await?;
        let mut state = self.state.write().await;
        state.session = Some(session);
        state.validated = true;
        debug!("Access token refreshed");
        Ok(())
    }

    /// Trust-on-read restore: load the stored session into memory without
    /// asking the server. The session stays unvalidated until
    /// [`ensure_valid`](Self::ensure_valid) or a profile fetch succeeds.
    /// Returns whether a session was found.
    pub async fn hydrate(&self) -> SessionResult<bool> {
        let loaded = self.repository.load().await?;

        if let Some(message) = &loaded.corruption_error {
            warn!("Discarded unusable stored session: {message}");
        }
        if loaded.migrated {
            info!("Restored session from legacy storage keys");
        }

        let Some(session) = loaded.session else {
            debug!("No stored session");
            return Ok(false);
        };

        let mut state = self.state.write().await;
        state.session = Some(session);
        state.validated = false;
        Ok(true)
    }

    /// Restore a session from storage on start-up and validate it.
    ///
    /// The stored session is trusted long enough to issue `GET /auth/me`.
    /// If that fails the store ends up exactly as after [`logout`](Self::logout).
    /// Returns whether a validated session is active afterwards.
    pub async fn initialize_session(&self) -> SessionResult<bool> {
        if !self.hydrate().await? {
            return Ok(false);
        }

        match self.validate().await {
            Ok(_) => Ok(true),
            Err(e) => {
                info!("Stored session rejected: {}", e.display_message());
                self.clear_local().await?;
                self.state.write().await.error = None;
                Ok(false)
            }
        }
    }

    /// Gate for authorized actions. Validates a hydrated token once; a token
    /// the server rejects ends the session.
    pub async fn ensure_valid(&self) -> SessionResult<()> {
        {
            let state = self.state.read().await;
            if state.session.is_none() {
                return Err(SessionError::not_authenticated());
            }
            if state.validated {
                return Ok(());
            }
        }

        if let Err(e) = self.validate().await {
            self.clear_local().await?;
            let err = SessionError::auth_expired(e.display_message());
            self.state.write().await.error = Some(err.display_message());
            return Err(err);
        }
        Ok(())
    }

    async fn validate(&self) -> SessionResult<User> {
        self.begin().await;
        let result = self.replace_profile().await;
        let mut state = self.state.write().await;
        state.in_flight = state.in_flight.saturating_sub(1);
        result
    }

    // =========================================================================
    // Profile
    // =========================================================================

    pub async fn fetch_current_user(&self) -> SessionResult<User> {
        self.begin().await;
        let result = self.fetch_user_inner().await;
        self.finish(&result, FETCH_USER_FAILED).await;
        result
    }

    async fn fetch_user_inner(&self) -> SessionResult<User> {
        self.require_session().await?;
        self.replace_profile().await
    }

    /// `GET /auth/me`, then replace the profile and mark the token validated.
    async fn replace_profile(&self) -> SessionResult<User> {
        let user = self.call(self.api.current_user()).await?;

        let session = {
            let state = self.state.read().await;
            let Some(current) = state.session.as_ref() else {
                return Err(SessionError::not_authenticated());
            };
            Session {
                user: Some(user.clone()),
                ..current.clone()
            }
        };

        self.repository.save(&session).await?;
        let mut state = self.state.write().await;
        state.session = Some(session);
        state.validated = true;
        Ok(user)
    }

    /// Shallow-merge `update` into the current profile, pushing it to the
    /// server first. A remote failure leaves the local profile untouched.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> SessionResult<User> {
        self.begin().await;
        let result = self.update_profile_inner(update).await;
        self.finish(&result, PROFILE_UPDATE_FAILED).await;
        result
    }

    async fn update_profile_inner(&self, update: &ProfileUpdate) -> SessionResult<User> {
        if self.current_user().await.is_none() {
            return Err(SessionError::no_profile());
        }

        let remote = self.call(self.api.update_profile(update)).await?;

        let (session, merged) = {
            let state = self.state.read().await;
            let Some(current) = state.session.as_ref() else {
                return Err(SessionError::not_authenticated());
            };
            let Some(user) = current.user.as_ref() else {
                return Err(SessionError::no_profile());
            };
            let mut merged = user.merged(update);
            if remote.updated_at.is_some() {
                merged.updated_at = remote.updated_at;
            }
            let session = Session {
                user: Some(merged.clone()),
                ..current.clone()
            };
            (session, merged)
        };

        self.repository.save(&session).await?;
        self.state.write().await.session = Some(session);
        Ok(merged)
    }

    // =========================================================================
    // Unauthorized handling
    // =========================================================================

    /// Apply the configured policy after a service answered 401.
    pub async fn handle_unauthorized(&self) -> SessionResult<()> {
        if self.unauthorized_policy.clears_session() {
            warn!("Server rejected the session, signing out");
            self.clear_local().await?;
        }
        self.state.write().await.error = Some(SESSION_EXPIRED.to_string());
        Ok(())
    }

    /// Await a session-bound call, routing a 401 through the policy.
    async fn call<T>(
        &self,
        request: impl std::future::Future<Output = Result<T, ClientError>>,
    ) -> SessionResult<T> {
        match request.await {
            Ok(value) => Ok(value),
            Err(e) if e.is_unauthorized() => {
                self.handle_unauthorized().await?;
                Err(SessionError::auth_expired(SESSION_EXPIRED))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn require_session(&self) -> SessionResult<()> {
        if self.state.read().await.session.is_none() {
            return Err(SessionError::not_authenticated());
        }
        Ok(())
    }

    // =========================================================================
    // Loading / error bookkeeping
    // =========================================================================

    /// Each operation overwrites the previous error.
    async fn begin(&self) {
        let mut state = self.state.write().await;
        state.in_flight += 1;
        state.error = None;
    }

    async fn finish<T>(&self, result: &SessionResult<T>, fallback: &str) {
        let mut state = self.state.write().await;
        state.in_flight = state.in_flight.saturating_sub(1);
        if let Err(e) = result {
            state.error = Some(Self::error_message(e, fallback));
        }
    }

    fn error_message(error: &SessionError, fallback: &str) -> String {
        match error {
            SessionError::Api { source, .. } => source.message_or(fallback),
            other => other.display_message(),
        }
    }
}
