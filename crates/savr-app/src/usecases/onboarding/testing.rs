//! Test doubles shared by the onboarding use case tests

use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};
use savr_core::onboarding::OnboardingRecord;
use savr_core::ports::{
    ClockPort, OnboardingDiagnostic, OnboardingEventPort, OnboardingRecordPort, RecordStoreError,
};

use super::OnboardingAnswerStore;

#[derive(Default)]
pub struct MemoryRecordPort {
    record: Mutex<Option<OnboardingRecord>>,
}

impl MemoryRecordPort {
    pub fn with_record(record: OnboardingRecord) -> Self {
        Self {
            record: Mutex::new(Some(record)),
        }
    }

    pub fn stored(&self) -> Option<OnboardingRecord> {
        self.record.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl OnboardingRecordPort for MemoryRecordPort {
    async fn load(&self) -> Result<Option<OnboardingRecord>, RecordStoreError> {
        Ok(self.record.lock().unwrap().clone())
    }

    async fn save(&self, record: &OnboardingRecord) -> Result<(), RecordStoreError> {
        *self.record.lock().unwrap() = Some(record.clone());
        Ok(())
    }

    async fn remove(&self) -> Result<(), RecordStoreError> {
        *self.record.lock().unwrap() = None;
        Ok(())
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Default)]
pub struct RecordingEvents {
    pub diagnostics: Mutex<Vec<OnboardingDiagnostic>>,
}

impl OnboardingEventPort for RecordingEvents {
    fn emit(&self, diagnostic: OnboardingDiagnostic) {
        self.diagnostics.lock().unwrap().push(diagnostic);
    }
}

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap()
}

pub fn spawn_store(records: Arc<MemoryRecordPort>) -> OnboardingAnswerStore {
    OnboardingAnswerStore::spawn(
        records,
        Arc::new(FixedClock(fixed_time())),
        Arc::new(RecordingEvents::default()),
        4,
    )
}
