use crate::ClientResult;

use bd_core::{AuthResponse, LoginCredentials, ProfileUpdate, RegisterData, TokenRefresh, User};

use async_trait::async_trait;

/// Remote side of the session lifecycle.
///
/// [`AuthService`](crate::AuthService) talks HTTP; tests substitute fakes.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, credentials: &LoginCredentials) -> ClientResult<AuthResponse>;

    async fn register(&self, data: &RegisterData) -> ClientResult<AuthResponse>;

    async fn current_user(&self) -> ClientResult<User>;

    async fn update_profile(&self, update: &ProfileUpdate) -> ClientResult<User>;

    async fn delete_account(&self) -> ClientResult<()>;

    async fn logout(&self) -> ClientResult<()>;

    async fn refresh_token(&self, refresh_token: &str) -> ClientResult<TokenRefresh>;
}
