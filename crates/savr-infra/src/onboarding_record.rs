//! Key-value backed onboarding record repository
//!
//! This module provides the OnboardingRecordPort implementation that stores the
//! onboarding record as one JSON object under a fixed key of the device
//! key-value storage.

use std::sync::Arc;

use async_trait::async_trait;
use savr_core::onboarding::OnboardingRecord;
use savr_core::ports::{KeyValueStoragePort, OnboardingRecordPort, RecordStoreError};

pub const DEFAULT_ONBOARDING_KEY: &str = "@savr_onboarding_data";

pub struct KeyValueOnboardingRepository {
    storage: Arc<dyn KeyValueStoragePort>,
    key: String,
}

impl KeyValueOnboardingRepository {
    /// Create repository with a custom storage key
    pub fn new(storage: Arc<dyn KeyValueStoragePort>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Create repository with defaults
    pub fn with_defaults(storage: Arc<dyn KeyValueStoragePort>) -> Self {
        Self::new(storage, DEFAULT_ONBOARDING_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

#[async_trait]
impl OnboardingRecordPort for KeyValueOnboardingRepository {
    async fn load(&self) -> Result<Option<OnboardingRecord>, RecordStoreError> {
        let Some(bytes) = self
            .storage
            .get(&self.key)
            .await
            .map_err(RecordStoreError::Storage)?
        else {
            return Ok(None);
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        let record = serde_json::from_slice(&bytes).map_err(RecordStoreError::Decode)?;
        Ok(Some(record))
    }

    async fn save(&self, record: &OnboardingRecord) -> Result<(), RecordStoreError> {
        let json = serde_json::to_vec(record).map_err(RecordStoreError::Encode)?;

        self.storage
            .set(&self.key, &json)
            .await
            .map_err(RecordStoreError::Storage)
    }

    async fn remove(&self) -> Result<(), RecordStoreError> {
        self.storage
            .remove(&self.key)
            .await
            .map_err(RecordStoreError::Storage)
    }
}
