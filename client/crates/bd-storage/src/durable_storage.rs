use crate::StorageResult;

use async_trait::async_trait;

/// String key-value store that outlives the process (or pretends to).
///
/// Every read goes to the backing store; implementations must not cache
/// values, so a token cleared elsewhere is seen on the next read.
#[async_trait]
pub trait DurableStorage: Send + Sync {
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> StorageResult<()>;
}
