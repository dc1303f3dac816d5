use super::OnboardingAnswerStore;

/// Use case for completing onboarding.
///
/// Marks the stored record complete and stamps `completed_at`. Without a
/// stored record nothing is written.
pub struct CompleteOnboarding {
    store: OnboardingAnswerStore,
}

impl CompleteOnboarding {
    pub fn new(store: OnboardingAnswerStore) -> Self {
        Self { store }
    }

    /// Mark onboarding as complete and report whether it now is.
    pub async fn execute(&self) -> bool {
        self.store.mark_completed().await;
        self.store.is_completed().await
    }
}
