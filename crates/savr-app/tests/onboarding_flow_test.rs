//! Onboarding store and orchestrator over the real infra adapters

use std::sync::Arc;

use savr_app::usecases::onboarding::{
    CompleteOnboarding, GetOnboardingRecord, ResetOnboarding, ResolveLaunchRoute,
};
use savr_app::{OnboardingAnswerStore, OnboardingOrchestrator};
use savr_core::onboarding::{AnswerValue, LaunchRoute};
use savr_core::ports::{DiagnosticKind, KeyValueStoragePort, StoreOperation};
use savr_core::JourneyType;
use savr_infra::onboarding_record::DEFAULT_ONBOARDING_KEY;
use savr_infra::{
    BroadcastOnboardingEvents, FileKeyValueStorage, InMemoryKeyValueStorage,
    KeyValueOnboardingRepository, SystemClock,
};
use tempfile::TempDir;
use tokio::sync::broadcast;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

struct Harness {
    storage: Arc<dyn KeyValueStoragePort>,
    store: OnboardingAnswerStore,
    diagnostics: broadcast::Receiver<savr_core::ports::OnboardingDiagnostic>,
}

fn harness(storage: Arc<dyn KeyValueStoragePort>) -> Harness {
    init_tracing();
    let events = Arc::new(BroadcastOnboardingEvents::new(16));
    let diagnostics = events.subscribe();
    let store = OnboardingAnswerStore::spawn(
        Arc::new(KeyValueOnboardingRepository::with_defaults(storage.clone())),
        Arc::new(SystemClock),
        events,
        8,
    );
    Harness {
        storage,
        store,
        diagnostics,
    }
}

struct BrokenStorage;

#[async_trait::async_trait]
impl KeyValueStoragePort for BrokenStorage {
    async fn get(&self, _key: &str) -> anyhow::Result<Option<Vec<u8>>> {
        anyhow::bail!("storage offline")
    }

    async fn set(&self, _key: &str, _value: &[u8]) -> anyhow::Result<()> {
        anyhow::bail!("storage offline")
    }

    async fn remove(&self, _key: &str) -> anyhow::Result<()> {
        anyhow::bail!("storage offline")
    }
}

#[tokio::test]
async fn cook_more_record_persists_expected_json() {
    let temp_dir = TempDir::new().unwrap();
    let h = harness(Arc::new(FileKeyValueStorage::new(temp_dir.path())));

    h.store.set_journey_type(JourneyType::CookMore).await;
    h.store
        .save_answer("grocery-spend", AnswerValue::Number(100))
        .await;
    h.store.save_answer("cooking-commitment", "3".into()).await;
    assert!(CompleteOnboarding::new(h.store.clone()).execute().await);

    let bytes = h.storage.get(DEFAULT_ONBOARDING_KEY).await.unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["completed"], true);
    assert_eq!(json["journeyType"], "cook-more");
    assert_eq!(
        json["answers"],
        serde_json::json!({ "grocery-spend": 100, "cooking-commitment": "3" })
    );
    let completed_at = json["completedAt"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(completed_at).is_ok());
}

#[tokio::test]
async fn completed_record_survives_restart() {
    let temp_dir = TempDir::new().unwrap();
    {
        let h = harness(Arc::new(FileKeyValueStorage::new(temp_dir.path())));
        let orchestrator = OnboardingOrchestrator::new(h.store.clone());
        orchestrator.choose_journey(JourneyType::CookMore).await;
        orchestrator.submit("bulk-meal-prepper".into()).await;
        orchestrator.submit("monthly".into()).await;
        orchestrator.submit(AnswerValue::Number(80)).await;
        orchestrator.submit("5".into()).await;
    }

    let h = harness(Arc::new(FileKeyValueStorage::new(temp_dir.path())));
    assert_eq!(
        ResolveLaunchRoute::new(h.store.clone()).execute().await,
        LaunchRoute::Dashboard
    );

    ResetOnboarding::new(h.store.clone()).execute().await;
    assert_eq!(
        ResolveLaunchRoute::new(h.store.clone()).execute().await,
        LaunchRoute::Onboarding
    );
    assert_eq!(GetOnboardingRecord::new(h.store).execute().await, None);
}

#[tokio::test]
async fn concurrent_saves_all_survive_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let h = harness(Arc::new(FileKeyValueStorage::new(temp_dir.path())));

    let tasks: Vec<_> = (0..20)
        .map(|i| {
            let store = h.store.clone();
            tokio::spawn(async move {
                store
                    .save_answer(format!("answer-{i}"), AnswerValue::Number(i))
                    .await
            })
        })
        .collect();
    for task in tasks {
        task.await.unwrap();
    }

    let record = h.store.read().await.unwrap();
    assert_eq!(record.answers.len(), 20);
}

#[tokio::test]
async fn corrupt_payload_reads_as_absent_and_is_reported() {
    let mut h = harness(Arc::new(InMemoryKeyValueStorage::new()));
    h.storage
        .set(DEFAULT_ONBOARDING_KEY, b"{\"completed\": tru")
        .await
        .unwrap();

    assert_eq!(h.store.read().await, None);
    assert!(!h.store.is_completed().await);

    let diagnostic = h.diagnostics.recv().await.unwrap();
    assert_eq!(diagnostic.operation, StoreOperation::Read);
    assert_eq!(diagnostic.kind, DiagnosticKind::Decode);

    h.store.save_answer("order-type", "late-night".into()).await;
    let record = h.store.read().await.unwrap();
    assert_eq!(record.answers.len(), 1);
}

#[tokio::test]
async fn non_finite_answer_does_not_wipe_earlier_answers() {
    let temp_dir = TempDir::new().unwrap();
    let mut h = harness(Arc::new(FileKeyValueStorage::new(temp_dir.path())));

    h.store
        .save_answer("grocery-spend", AnswerValue::Number(100))
        .await;
    h.store.save_answer("cooking-commitment", "3".into()).await;
    h.store
        .save_answer("ratio", AnswerValue::Decimal(f64::INFINITY))
        .await;

    let diagnostic = h.diagnostics.recv().await.unwrap();
    assert_eq!(diagnostic.operation, StoreOperation::SaveAnswer);
    assert_eq!(diagnostic.kind, DiagnosticKind::Encode);

    let record = h.store.read().await.unwrap();
    assert_eq!(record.answers.len(), 2);
    assert_eq!(record.answer("ratio"), None);

    h.store.save_answer("order-type", "late-night".into()).await;
    let record = h.store.read().await.unwrap();
    assert_eq!(record.answers.len(), 3);
    assert_eq!(
        record.answer("grocery-spend"),
        Some(&AnswerValue::Number(100))
    );
    assert_eq!(
        record.answer("cooking-commitment"),
        Some(&AnswerValue::from("3"))
    );
    assert!(h.diagnostics.try_recv().is_err());
}

#[tokio::test]
async fn failing_storage_never_errors_the_caller() {
    let mut h = harness(Arc::new(BrokenStorage));

    h.store.save_answer("order-type", "late-night".into()).await;
    h.store.mark_completed().await;
    h.store.clear().await;
    assert_eq!(h.store.read().await, None);

    let mut kinds = Vec::new();
    while let Ok(diagnostic) = h.diagnostics.try_recv() {
        kinds.push(diagnostic.kind);
    }
    assert!(kinds.contains(&DiagnosticKind::Storage));
    assert!(kinds.contains(&DiagnosticKind::MissingRecord));
}

#[tokio::test]
async fn mark_completed_on_fresh_install_writes_nothing() {
    let mut h = harness(Arc::new(InMemoryKeyValueStorage::new()));

    h.store.mark_completed().await;

    assert!(h.storage.get(DEFAULT_ONBOARDING_KEY).await.unwrap().is_none());
    let diagnostic = h.diagnostics.recv().await.unwrap();
    assert_eq!(diagnostic.kind, DiagnosticKind::MissingRecord);
}
