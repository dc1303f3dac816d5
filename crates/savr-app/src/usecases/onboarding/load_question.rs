use savr_core::onboarding::{question_at, total_steps, AnswerValue, Question};
use savr_core::JourneyType;

use super::OnboardingAnswerStore;

/// Everything a question screen needs to render.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionView {
    pub question: &'static Question,
    /// 0-based position in the journey
    pub step: usize,
    pub total_steps: usize,
    /// Stored answer, else the slider default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<AnswerValue>,
}

/// Use case for loading one question screen.
pub struct LoadQuestion {
    store: OnboardingAnswerStore,
}

impl LoadQuestion {
    pub fn new(store: OnboardingAnswerStore) -> Self {
        Self { store }
    }

    /// Returns `None` when `step` is outside the journey.
    pub async fn execute(&self, journey: JourneyType, step: i64) -> Option<QuestionView> {
        let question = question_at(journey, step)?;
        let record = self.store.read().await;
        let existing = record.as_ref().and_then(|r| r.answer(&question.id));

        Some(QuestionView {
            question,
            step: usize::try_from(step).ok()?,
            total_steps: total_steps(journey),
            initial_value: question.initial_value(existing),
        })
    }
}
