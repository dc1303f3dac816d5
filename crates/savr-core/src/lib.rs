//! # savr-core
//!
//! Core domain models and onboarding logic for Savr.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod journey;
pub mod onboarding;
pub mod ports;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use journey::JourneyType;
pub use onboarding::{
    AnswerValue, LaunchRoute, OnboardingAction, OnboardingEvent, OnboardingFlowMachine,
    OnboardingRecord, OnboardingStage, Question, QuestionOption, QuestionType,
};
