//! Onboarding record persisted through file-backed key-value storage

use std::sync::Arc;

use chrono::Utc;
use savr_core::onboarding::{AnswerValue, OnboardingRecord};
use savr_core::ports::{KeyValueStoragePort, OnboardingRecordPort, RecordStoreError};
use savr_core::JourneyType;
use savr_infra::onboarding_record::DEFAULT_ONBOARDING_KEY;
use savr_infra::{FileKeyValueStorage, KeyValueOnboardingRepository};
use tempfile::TempDir;

#[tokio::test]
async fn persisted_payload_is_plain_record_json() {
    let temp_dir = TempDir::new().unwrap();
    let storage = Arc::new(FileKeyValueStorage::new(temp_dir.path()));
    let repo = KeyValueOnboardingRepository::with_defaults(storage.clone());

    let mut record = OnboardingRecord::new(JourneyType::OrderLess);
    record.record_answer("delivery-app", "ubereats".into());
    record.record_answer("app-permission-granted", AnswerValue::Flag(true));
    record.record_answer("app-spend", AnswerValue::Number(50));
    record.complete(Utc::now());
    repo.save(&record).await.unwrap();

    let bytes = storage.get(DEFAULT_ONBOARDING_KEY).await.unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let fields: Vec<&str> = json
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();

    assert_eq!(fields.len(), 4);
    for field in ["completed", "journeyType", "answers", "completedAt"] {
        assert!(fields.contains(&field), "missing field {field}");
    }
    assert_eq!(json["answers"]["app-permission-granted"], true);
    assert_eq!(json["answers"]["delivery-app"], "ubereats");
}

#[tokio::test]
async fn payload_written_by_other_client_is_readable() {
    let temp_dir = TempDir::new().unwrap();
    let storage = Arc::new(FileKeyValueStorage::new(temp_dir.path()));
    let repo = KeyValueOnboardingRepository::with_defaults(storage.clone());

    storage
        .set(
            DEFAULT_ONBOARDING_KEY,
            br#"{"completed":false,"journeyType":"cook-more","answers":{"grocery-spend":100,"cooking-commitment":"3"}}"#,
        )
        .await
        .unwrap();

    let record = repo.load().await.unwrap().unwrap();
    assert_eq!(record.journey_type, JourneyType::CookMore);
    assert_eq!(record.answer("grocery-spend"), Some(&AnswerValue::Number(100)));
    assert_eq!(record.answer("cooking-commitment"), Some(&AnswerValue::from("3")));
}

#[tokio::test]
async fn corrupted_file_surfaces_decode_error() {
    let temp_dir = TempDir::new().unwrap();
    let storage = Arc::new(FileKeyValueStorage::new(temp_dir.path()));
    let repo = KeyValueOnboardingRepository::with_defaults(storage.clone());

    storage
        .set(DEFAULT_ONBOARDING_KEY, b"\x00\x01not json")
        .await
        .unwrap();

    assert!(matches!(repo.load().await, Err(RecordStoreError::Decode(_))));
}
