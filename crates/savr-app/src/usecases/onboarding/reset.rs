use tracing::info;

use super::OnboardingAnswerStore;

/// Use case for restarting onboarding from scratch.
pub struct ResetOnboarding {
    store: OnboardingAnswerStore,
}

impl ResetOnboarding {
    pub fn new(store: OnboardingAnswerStore) -> Self {
        Self { store }
    }

    pub async fn execute(&self) {
        info!("resetting onboarding data");
        self.store.clear().await;
    }
}
