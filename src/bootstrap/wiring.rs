//! # Dependency Injection
//!
//! Builds the infra adapters named by the configuration and hands them to the
//! application layer as port trait objects. No onboarding decisions are made
//! here.

use std::sync::Arc;

use savr_app::usecases::onboarding::{
    GetOnboardingStatus, OnboardingAnswerStore, OnboardingOrchestrator, ResolveLaunchRoute,
};
use savr_core::config::AppConfig;
use savr_core::ports::{ClockPort, KeyValueStoragePort, OnboardingEventPort, OnboardingRecordPort};
use savr_infra::{
    BroadcastOnboardingEvents, FileKeyValueStorage, InMemoryKeyValueStorage,
    KeyValueOnboardingRepository, SystemClock,
};
use tracing::info;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("unknown storage backend: '{0}' (expected 'file' or 'memory')")]
    UnknownBackend(String),
}

/// Assembled onboarding dependencies
pub struct OnboardingDeps {
    pub store: OnboardingAnswerStore,
    /// Concrete sink, kept so callers can subscribe to diagnostics
    pub events: Arc<BroadcastOnboardingEvents>,
}

impl OnboardingDeps {
    pub fn orchestrator(&self) -> OnboardingOrchestrator {
        OnboardingOrchestrator::new(self.store.clone())
    }

    pub fn resolve_launch_route(&self) -> ResolveLaunchRoute {
        ResolveLaunchRoute::new(self.store.clone())
    }

    pub fn onboarding_status(&self) -> GetOnboardingStatus {
        GetOnboardingStatus::new(self.store.clone())
    }
}

fn create_storage(config: &AppConfig) -> WiringResult<Arc<dyn KeyValueStoragePort>> {
    match config.storage_backend.as_str() {
        "file" => Ok(Arc::new(FileKeyValueStorage::new(config.data_dir.clone()))),
        "memory" => Ok(Arc::new(InMemoryKeyValueStorage::new())),
        other => Err(WiringError::UnknownBackend(other.to_string())),
    }
}

/// Wire the onboarding store from configuration.
///
/// Spawns the store worker, so it must be called from within a tokio runtime.
pub fn wire_dependencies(config: &AppConfig) -> WiringResult<OnboardingDeps> {
    let storage = create_storage(config)?;
    info!(
        backend = %config.storage_backend,
        data_dir = %config.data_dir.display(),
        "onboarding storage ready"
    );

    let records: Arc<dyn OnboardingRecordPort> =
        Arc::new(KeyValueOnboardingRepository::with_defaults(storage));
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);
    let events = Arc::new(BroadcastOnboardingEvents::new(config.diagnostics_capacity));
    let event_port: Arc<dyn OnboardingEventPort> = events.clone();

    let store = OnboardingAnswerStore::spawn(records, clock, event_port, config.queue_capacity);

    Ok(OnboardingDeps { store, events })
}
