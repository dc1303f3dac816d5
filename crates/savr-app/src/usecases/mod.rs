//! Business logic use cases

pub mod onboarding;
