use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// What happens to the persisted session when the API answers 401.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnauthorizedPolicy {
    /// Clear stored tokens and treat the session as over.
    #[default]
    ForceLogout,
    /// Report the 401 and leave the session for the caller to handle.
    PassThrough,
}

impl UnauthorizedPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ForceLogout => "force_logout",
            Self::PassThrough => "pass_through",
        }
    }

    pub fn clears_session(&self) -> bool {
        matches!(self, Self::ForceLogout)
    }
}

impl FromStr for UnauthorizedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "force_logout" => Ok(Self::ForceLogout),
            "pass_through" => Ok(Self::PassThrough),
            other => Err(format!("unknown unauthorized policy '{other}'")),
        }
    }
}

impl fmt::Display for UnauthorizedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
