use std::fmt;

/// Coarse classification shared by every crate's error type.
///
/// Stores reduce failures to a display string; the kind decides what the
/// store does next (keep state, clear one collection flag, or tear down the
/// session).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad credentials or malformed input.
    ValidationFailure,
    /// Network, decoding or fixture failure. Surfaced, never retried.
    TransientFetchFailure,
    /// Token rejected or refresh failed. Forces a full local logout.
    AuthExpiry,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationFailure => "validation_failure",
            Self::TransientFetchFailure => "transient_fetch_failure",
            Self::AuthExpiry => "auth_expiry",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
