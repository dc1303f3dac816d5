//! Key-value storage port
//!
//! Byte-oriented device storage addressed by string keys. Values are assumed
//! durable across process restarts.

use async_trait::async_trait;

#[async_trait]
pub trait KeyValueStoragePort: Send + Sync {
    /// Fetch the bytes stored under `key`, or `None` if nothing was stored.
    async fn get(&self, key: &str) -> anyhow::Result<Option<Vec<u8>>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &[u8]) -> anyhow::Result<()>;

    /// Delete `key`. Removing a missing key succeeds.
    async fn remove(&self, key: &str) -> anyhow::Result<()>;
}
