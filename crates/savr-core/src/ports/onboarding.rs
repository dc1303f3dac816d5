//! Onboarding record port
//!
//! This port defines the contract for persisting and retrieving the onboarding
//! record. Implementations are provided by the infrastructure layer (e.g.
//! JSON over key-value storage).

use async_trait::async_trait;
use thiserror::Error;

use crate::onboarding::OnboardingRecord;

#[derive(Debug, Error)]
pub enum RecordStoreError {
    #[error("storage failure: {0:#}")]
    Storage(#[source] anyhow::Error),
    #[error("failed to decode onboarding record: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("failed to encode onboarding record: {0}")]
    Encode(#[source] serde_json::Error),
}

#[async_trait]
pub trait OnboardingRecordPort: Send + Sync {
    /// Load the record, `None` if it has never been written.
    async fn load(&self) -> Result<Option<OnboardingRecord>, RecordStoreError>;

    /// Replace the stored record.
    async fn save(&self, record: &OnboardingRecord) -> Result<(), RecordStoreError>;

    /// Delete the record (for resets or re-onboarding)
    async fn remove(&self) -> Result<(), RecordStoreError>;
}
