//! Savr onboarding service bootstrap
//!
//! Loads configuration, installs tracing and assembles the onboarding store
//! from the infra adapters.

pub mod bootstrap;
