//! Onboarding orchestrator.
//!
//! This module couples the onboarding navigation machine with the answer
//! store: events go through the machine and the resulting actions are
//! written through the store.

use tokio::sync::Mutex;
use tracing::{debug, info, info_span, Instrument};

use savr_core::onboarding::{
    AnswerValue, OnboardingAction, OnboardingEvent, OnboardingFlowMachine, OnboardingStage,
};
use savr_core::JourneyType;

use super::OnboardingAnswerStore;

/// Drives the onboarding screens and persists every step.
pub struct OnboardingOrchestrator {
    store: OnboardingAnswerStore,
    stage: Mutex<OnboardingStage>,
}

impl OnboardingOrchestrator {
    pub fn new(store: OnboardingAnswerStore) -> Self {
        Self {
            store,
            stage: Mutex::new(OnboardingStage::ChooseJourney),
        }
    }

    pub async fn stage(&self) -> OnboardingStage {
        self.stage.lock().await.clone()
    }

    pub async fn choose_journey(&self, journey: JourneyType) -> OnboardingStage {
        self.dispatch(OnboardingEvent::ChooseJourney(journey)).await
    }

    pub async fn submit(&self, value: AnswerValue) -> OnboardingStage {
        self.dispatch(OnboardingEvent::Submit(value)).await
    }

    pub async fn respond_permission(&self, granted: bool) -> OnboardingStage {
        self.dispatch(OnboardingEvent::RespondPermission { granted })
            .await
    }

    pub async fn back(&self) -> OnboardingStage {
        self.dispatch(OnboardingEvent::Back).await
    }

    /// Apply one event and run its actions before returning the new stage.
    pub async fn dispatch(&self, event: OnboardingEvent) -> OnboardingStage {
        // Held across the actions so concurrent dispatches apply in order.
        let mut stage = self.stage.lock().await;

        let span = info_span!("usecase.onboarding_orchestrator.dispatch", event = ?event);
        async {
            let from = stage.clone();
            let (next, actions) = OnboardingFlowMachine::transition(from.clone(), event);
            info!(from = ?from, to = ?next, "onboarding stage transition");
            self.execute_actions(actions).await;
            *stage = next.clone();
            next
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(&self, actions: Vec<OnboardingAction>) {
        for action in actions {
            debug!(?action, "onboarding executing action");
            match action {
                OnboardingAction::PersistJourney(journey) => {
                    self.store.set_journey_type(journey).await;
                }
                OnboardingAction::PersistAnswer { question_id, value } => {
                    self.store.save_answer(question_id, value).await;
                }
                OnboardingAction::MarkCompleted => {
                    self.store.mark_completed().await;
                }
            }
        }
    }
}
