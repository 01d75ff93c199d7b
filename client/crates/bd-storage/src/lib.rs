mod durable_storage;
mod error;
mod file_storage;
mod load_result;
mod memory_storage;
mod persisted_session;
mod session_repository;

pub use durable_storage::DurableStorage;
pub use error::{StorageError, StorageResult};
pub use file_storage::FileStorage;
pub use load_result::LoadResult;
pub use memory_storage::MemoryStorage;
pub use persisted_session::{CURRENT_SCHEMA_VERSION, PersistedSession};
pub use session_repository::SessionRepository;

/// Key the versioned session record lives under.
pub const SESSION_KEY: &str = "bankdash.session";

/// Keys written by older clients, folded into [`SESSION_KEY`] on first read.
pub const LEGACY_TOKEN_KEYS: [&str; 2] = ["auth_token", "token"];
pub const LEGACY_REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const LEGACY_USER_KEY: &str = "user";

#[cfg(test)]
mod tests;
