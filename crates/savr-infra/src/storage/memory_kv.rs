use std::collections::HashMap;

use async_trait::async_trait;
use savr_core::ports::KeyValueStoragePort;
use tokio::sync::RwLock;

/// Process-local key-value storage. Nothing survives a restart.
#[derive(Default)]
pub struct InMemoryKeyValueStorage {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryKeyValueStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStoragePort for InMemoryKeyValueStorage {
    async fn get(&self, key: &str) -> anyhow::Result<Option<Vec<u8>>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &[u8]) -> anyhow::Result<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn remove(&self, key: &str) -> anyhow::Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}
