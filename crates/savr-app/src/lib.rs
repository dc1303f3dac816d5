//! Savr Application Orchestration Layer
//!
//! This crate contains the onboarding answer store, the onboarding use cases
//! and the orchestrator that drives the onboarding screens.

pub mod usecases;

pub use usecases::onboarding::{OnboardingAnswerStore, OnboardingOrchestrator};
