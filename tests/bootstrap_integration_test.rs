//! Bootstrap integration tests
//!
//! Config file -> wiring -> onboarding store over file storage.

use std::fs;
use std::path::PathBuf;

use savr_core::onboarding::{AnswerValue, LaunchRoute, OnboardingStage};
use savr_core::JourneyType;
use savr_lib::bootstrap::config::merge_defaults;
use savr_lib::bootstrap::{load_config, wire_dependencies};
use savr_core::config::AppConfig;
use tempfile::TempDir;

fn write_config(temp_dir: &TempDir, data_dir: &std::path::Path) -> PathBuf {
    let config_path = temp_dir.path().join("savr.toml");
    let toml_content = format!(
        r#"
        [storage]
        backend = "file"
        data_dir = "{}"

        [store]
        queue_capacity = 2
        "#,
        data_dir.display()
    );
    fs::write(&config_path, toml_content).unwrap();
    config_path
}

#[test]
fn test_config_file_is_loaded_as_is() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");
    let config = load_config(write_config(&temp_dir, &data_dir)).unwrap();

    assert_eq!(config.storage_backend, "file");
    assert_eq!(config.data_dir, data_dir);
    assert_eq!(config.queue_capacity, 2);
    assert_eq!(config.diagnostics_capacity, 0);
    assert_eq!(config.log_dir, PathBuf::new());
}

#[tokio::test]
async fn test_wired_store_persists_across_restarts() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");
    let loaded = load_config(write_config(&temp_dir, &data_dir)).unwrap();
    let config = merge_defaults(loaded, AppConfig::with_system_defaults(temp_dir.path().into()));

    {
        let deps = wire_dependencies(&config).unwrap();
        assert_eq!(
            deps.resolve_launch_route().execute().await,
            LaunchRoute::Onboarding
        );

        let orchestrator = deps.orchestrator();
        orchestrator.choose_journey(JourneyType::CookMore).await;
        orchestrator.submit("aspiring-chef".into()).await;
        orchestrator.submit("beginning".into()).await;
        orchestrator.submit(AnswerValue::Number(120)).await;
        assert_eq!(
            orchestrator.submit("4".into()).await,
            OnboardingStage::Done
        );
    }

    let deps = wire_dependencies(&config).unwrap();
    assert_eq!(
        deps.resolve_launch_route().execute().await,
        LaunchRoute::Dashboard
    );

    let status = deps.onboarding_status().execute().await;
    assert!(status.completed);
    assert_eq!(status.journey_type, Some(JourneyType::CookMore));
    assert_eq!((status.answered_steps, status.total_steps), (4, 4));
    assert!(data_dir.is_dir());
}
