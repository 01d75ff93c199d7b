use bd_core::User;

use serde::Serialize;

/// Read-only copy of the store state at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub is_authenticated: bool,
    pub user: Option<User>,
    pub has_refresh_token: bool,
    pub is_validated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}
