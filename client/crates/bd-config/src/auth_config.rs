use crate::UnauthorizedPolicy;

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub unauthorized_policy: UnauthorizedPolicy,
}
