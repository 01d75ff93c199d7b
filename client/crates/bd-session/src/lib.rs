mod error;
mod session_snapshot;
mod session_store;

pub use error::{SessionError, SessionResult};
pub use session_snapshot::SessionSnapshot;
pub use session_store::SessionStore;

#[cfg(test)]
mod tests;
