//! Onboarding use cases
//!
//! This module contains the onboarding answer store and the use cases built on
//! it: reading the record, routing on launch, loading a question screen,
//! completing and resetting onboarding, and driving the screens end to end.

pub mod complete;
pub mod get_record;
pub mod launch;
pub mod load_question;
pub mod orchestrator;
pub mod reset;
pub mod store;

#[cfg(test)]
mod testing;

pub use complete::CompleteOnboarding;
pub use get_record::{GetOnboardingRecord, GetOnboardingStatus};
pub use launch::{IsOnboardingCompleted, ResolveLaunchRoute};
pub use load_question::{LoadQuestion, QuestionView};
pub use orchestrator::OnboardingOrchestrator;
pub use reset::ResetOnboarding;
pub use store::OnboardingAnswerStore;

use savr_core::JourneyType;

/// Data transfer object for onboarding progress
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingStatusDto {
    pub completed: bool,
    pub journey_type: Option<JourneyType>,
    /// Questions of the chosen journey that already have an answer
    pub answered_steps: usize,
    pub total_steps: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
}
