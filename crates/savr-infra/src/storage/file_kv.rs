//! File-based key-value storage
//!
//! Each key is stored in its own file inside a data directory. File names are
//! the hex encoding of the key, since keys such as `@savr_onboarding_data`
//! are not safe path components on every platform.

use anyhow::{Context, Result};
use async_trait::async_trait;
use savr_core::ports::KeyValueStoragePort;
use std::path::{Path, PathBuf};
use tokio::fs;

const VALUE_EXTENSION: &str = "kv";

pub struct FileKeyValueStorage {
    data_dir: PathBuf,
}

impl FileKeyValueStorage {
    /// Create storage rooted at `data_dir`. The directory is created lazily on first write.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir
            .join(format!("{}.{VALUE_EXTENSION}", hex::encode(key.as_bytes())))
    }

    async fn ensure_data_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir)
            .await
            .with_context(|| format!("create data dir failed: {}", self.data_dir.display()))
    }

    /// Write to a temporary sibling, then rename over the target so readers
    /// see either the previous bytes or the new ones.
    async fn atomic_write(&self, path: &Path, value: &[u8]) -> Result<()> {
        self.ensure_data_dir().await?;

        let tmp_path = path.with_extension(format!("{VALUE_EXTENSION}.tmp"));
        fs::write(&tmp_path, value)
            .await
            .with_context(|| format!("write temp value failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, path).await.with_context(|| {
            format!(
                "rename temp value to target failed: {} -> {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl KeyValueStoragePort for FileKeyValueStorage {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path_for(key);
        match fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("read value failed: {}", path.display())),
        }
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let path = self.path_for(key);
        self.atomic_write(&path, value).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("remove value failed: {}", path.display())),
        }
    }
}
