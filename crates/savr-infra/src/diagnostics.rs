//! Broadcast channel for onboarding diagnostics

use savr_core::ports::{OnboardingDiagnostic, OnboardingEventPort};
use tokio::sync::broadcast;
use tracing::{trace, warn};

/// Fans diagnostics out to any number of subscribers.
///
/// Slow subscribers lag and lose the oldest entries rather than blocking
/// the store.
pub struct BroadcastOnboardingEvents {
    sender: broadcast::Sender<OnboardingDiagnostic>,
}

impl BroadcastOnboardingEvents {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<OnboardingDiagnostic> {
        self.sender.subscribe()
    }
}

impl OnboardingEventPort for BroadcastOnboardingEvents {
    fn emit(&self, diagnostic: OnboardingDiagnostic) {
        warn!(
            operation = ?diagnostic.operation,
            kind = ?diagnostic.kind,
            "onboarding store diagnostic: {}",
            diagnostic.message
        );
        if self.sender.send(diagnostic).is_err() {
            trace!("no diagnostics subscribers");
        }
    }
}
