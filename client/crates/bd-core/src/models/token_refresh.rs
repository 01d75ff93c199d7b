use serde::{Deserialize, Serialize};

/// Body of `POST /auth/refresh`. The server may or may not rotate the
/// refresh token.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRefresh {
    pub token: String,
    #[serde(default, alias = "refresh_token")]
    pub refresh_token: Option<String>,
}

impl std::fmt::Debug for TokenRefresh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenRefresh")
            .field("rotated", &self.refresh_token.is_some())
            .finish_non_exhaustive()
    }
}
