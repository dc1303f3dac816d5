use savr_core::onboarding::LaunchRoute;
use tracing::info;

use super::OnboardingAnswerStore;

/// Use case for checking whether onboarding has been completed.
pub struct IsOnboardingCompleted {
    store: OnboardingAnswerStore,
}

impl IsOnboardingCompleted {
    pub fn new(store: OnboardingAnswerStore) -> Self {
        Self { store }
    }

    /// `false` when nothing is stored or the record cannot be read.
    pub async fn execute(&self) -> bool {
        self.store.is_completed().await
    }
}

/// Use case for picking the first screen on app launch.
pub struct ResolveLaunchRoute {
    store: OnboardingAnswerStore,
}

impl ResolveLaunchRoute {
    pub fn new(store: OnboardingAnswerStore) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> LaunchRoute {
        let route = LaunchRoute::from_completed(self.store.is_completed().await);
        info!(?route, "resolved launch route");
        route
    }
}
