use savr_core::onboarding::{flow_for, OnboardingRecord};

use super::{OnboardingAnswerStore, OnboardingStatusDto};

/// Use case for reading the stored onboarding record.
pub struct GetOnboardingRecord {
    store: OnboardingAnswerStore,
}

impl GetOnboardingRecord {
    pub fn new(store: OnboardingAnswerStore) -> Self {
        Self { store }
    }

    /// Stored record, or `None` when onboarding has not started or the
    /// record cannot be read.
    pub async fn execute(&self) -> Option<OnboardingRecord> {
        self.store.read().await
    }
}

/// Use case for summarizing onboarding progress.
///
/// Only answers to questions of the recorded journey count towards
/// `answered_steps`; shared ids such as `cooking-identity` count for
/// whichever journey is current.
pub struct GetOnboardingStatus {
    store: OnboardingAnswerStore,
}

impl GetOnboardingStatus {
    pub fn new(store: OnboardingAnswerStore) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> OnboardingStatusDto {
        let Some(record) = self.store.read().await else {
            return OnboardingStatusDto {
                completed: false,
                journey_type: None,
                answered_steps: 0,
                total_steps: 0,
                completed_at: None,
            };
        };

        let flow = flow_for(record.journey_type);
        let answered_steps = flow
            .iter()
            .filter(|q| record.answer(&q.id).is_some())
            .count();

        OnboardingStatusDto {
            completed: record.completed,
            journey_type: Some(record.journey_type),
            answered_steps,
            total_steps: flow.len(),
            completed_at: record.completed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::onboarding::testing::{fixed_time, spawn_store, MemoryRecordPort};
    use savr_core::onboarding::AnswerValue;
    use savr_core::JourneyType;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_record_is_none_before_onboarding_starts() {
        let store = spawn_store(Arc::new(MemoryRecordPort::default()));

        assert_eq!(GetOnboardingRecord::new(store).execute().await, None);
    }

    #[tokio::test]
    async fn test_record_reflects_saved_answers() {
        let store = spawn_store(Arc::new(MemoryRecordPort::default()));
        store.save_answer("budget", AnswerValue::Number(30)).await;

        let record = GetOnboardingRecord::new(store).execute().await.unwrap();

        assert_eq!(record.answer("budget"), Some(&AnswerValue::Number(30)));
    }

    #[tokio::test]
    async fn test_status_without_record() {
        let store = spawn_store(Arc::new(MemoryRecordPort::default()));

        let status = GetOnboardingStatus::new(store).execute().await;

        assert!(!status.completed);
        assert_eq!(status.journey_type, None);
        assert_eq!(status.total_steps, 0);
    }

    #[tokio::test]
    async fn test_status_counts_only_current_journey_answers() {
        let mut record = OnboardingRecord::new(JourneyType::CookMore);
        record.record_answer("cooking-identity", "aspiring-chef".into());
        record.record_answer("grocery-spend", AnswerValue::Number(100));
        record.record_answer("order-type", "late-night".into());
        record.complete(fixed_time());
        let store = spawn_store(Arc::new(MemoryRecordPort::with_record(record)));

        let status = GetOnboardingStatus::new(store).execute().await;

        assert_eq!(
            status,
            OnboardingStatusDto {
                completed: true,
                journey_type: Some(JourneyType::CookMore),
                answered_steps: 2,
                total_steps: 4,
                completed_at: Some(fixed_time()),
            }
        );
    }
}
