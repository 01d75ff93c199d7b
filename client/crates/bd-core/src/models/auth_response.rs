use crate::{Session, User};

use serde::{Deserialize, Serialize};

/// Body of a successful login or register call.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
    #[serde(alias = "refresh_token")]
    pub refresh_token: String,
}

impl From<AuthResponse> for Session {
    fn from(response: AuthResponse) -> Self {
        Session::new(
            response.token,
            Some(response.refresh_token),
            Some(response.user),
        )
    }
}

impl std::fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthResponse")
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}
