//! Onboarding domain models
//!
//! This module defines the question catalog for each journey, the answer and
//! record types persisted during onboarding, and the navigation state machine
//! that walks a user through the questions.

pub mod answer;
pub mod catalog;
pub mod navigation;
pub mod question;
pub mod record;

pub use answer::AnswerValue;
pub use catalog::{flow_for, question_at, total_steps};
pub use navigation::{
    FlowError, LaunchRoute, OnboardingAction, OnboardingEvent, OnboardingFlowMachine,
    OnboardingStage,
};
pub use question::{AnswerError, Question, QuestionOption, QuestionType, SliderBounds};
pub use record::{OnboardingRecord, PERMISSION_ANSWER_KEY};
